//! Modal Dialog
//!
//! Overlay with a title bar and close button. Clicking the backdrop closes it.

use leptos::prelude::*;

#[component]
pub fn Modal(
    #[prop(into)] title: Signal<String>,
    #[prop(into)] on_close: Callback<()>,
    /// Extra class for the dialog panel (e.g. "modal-wide")
    #[prop(optional, into)] class: Option<String>,
    children: Children,
) -> impl IntoView {
    let panel_class = match class {
        Some(extra) => format!("modal-panel {}", extra),
        None => "modal-panel".to_string(),
    };

    view! {
        <div class="modal-backdrop" on:click=move |_| on_close.run(())>
            <div class=panel_class on:click=|ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2>{move || title.get()}</h2>
                    <button class="icon-btn" title="Close" on:click=move |_| on_close.run(())>"×"</button>
                </div>
                <div class="modal-body">{children()}</div>
            </div>
        </div>
    }
}
