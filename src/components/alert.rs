//! Action Alert
//!
//! Dismissible banner for a store action the page could not complete.

use leptos::prelude::*;

#[component]
pub fn ActionAlert(message: RwSignal<Option<String>>) -> impl IntoView {
    move || {
        message.get().map(|text| {
            view! {
                <div class="alert error" role="alert">
                    <span>{text}</span>
                    <button class="icon-btn" title="Dismiss" on:click=move |_| message.set(None)>"×"</button>
                </div>
            }
        })
    }
}
