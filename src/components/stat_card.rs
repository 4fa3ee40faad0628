//! Stat Card Component

use leptos::prelude::*;

/// Headline number with a label and an optional hint line
#[component]
pub fn StatCard(
    #[prop(into)] title: String,
    #[prop(into)] value: Signal<String>,
    #[prop(optional, into)] hint: Option<Signal<String>>,
    /// Colour modifier: "primary", "success", "warning", "error"
    #[prop(optional, into)] tone: Option<String>,
    #[prop(optional, into)] icon: Option<String>,
) -> impl IntoView {
    let class = format!("stat-card {}", tone.unwrap_or_else(|| "primary".to_string()));

    view! {
        <div class=class>
            {icon.map(|icon| view! { <span class="stat-icon">{icon}</span> })}
            <div class="stat-body">
                <p class="stat-title">{title}</p>
                <p class="stat-value">{move || value.get()}</p>
                {hint.map(|hint| view! { <p class="stat-hint">{move || hint.get()}</p> })}
            </div>
        </div>
    }
}
