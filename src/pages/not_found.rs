//! 404 Page

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use blanq_core::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let location = use_location();

    view! {
        <div class="page not-found-page">
            <h1 class="display">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p class="muted">
                "Nothing lives at " <code>{move || location.pathname.get()}</code> "."
            </p>
            <div class="page-actions">
                <a class="btn primary" href=Route::Dashboard.path()>"Back to Dashboard"</a>
                <a class="btn secondary" href=Route::Home.path()>"Home"</a>
            </div>
        </div>
    }
}
