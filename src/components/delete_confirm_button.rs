//! Inline Delete Confirmation
//!
//! Deleting a record takes two clicks: the trigger swaps itself for a
//! prompt with ✓ and ✗ buttons.

use leptos::ev::MouseEvent;
use leptos::prelude::*;

#[component]
pub fn DeleteConfirmButton(
    /// CSS class of the trigger button
    #[prop(into)]
    button_class: String,
    /// Trigger text, "×" when omitted
    #[prop(optional, into)]
    label: Option<String>,
    /// Question shown while waiting for ✓, "Delete?" when omitted
    #[prop(optional, into)]
    prompt: Option<Signal<String>>,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let armed = RwSignal::new(false);
    let label = label.unwrap_or_else(|| "×".to_string());
    let prompt = prompt.unwrap_or_else(|| Signal::stored("Delete?".to_string()));
    // keep clicks away from row and card handlers underneath
    let stop = |ev: MouseEvent| ev.stop_propagation();

    move || {
        if armed.get() {
            view! {
                <span class="delete-confirm" on:click=stop>
                    <span class="delete-confirm-text">{move || prompt.get()}</span>
                    <button
                        class="confirm-btn"
                        title="Confirm"
                        on:click=move |_| {
                            armed.set(false);
                            on_confirm.run(());
                        }
                    >"✓"</button>
                    <button class="cancel-btn" title="Cancel" on:click=move |_| armed.set(false)>"✗"</button>
                </span>
            }
            .into_any()
        } else {
            view! {
                <button
                    class=button_class.clone()
                    title="Delete"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        armed.set(true);
                    }
                >{label.clone()}</button>
            }
            .into_any()
        }
    }
}
