//! Main Sidebar
//!
//! Brand, navigation entries and the signed-in user panel.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use blanq_core::routes::Route;

use crate::context::AppContext;

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let location = use_location();
    let (collapsed, set_collapsed) = signal(false);

    let brand = ctx.with_config(|c| c.brand.clone());

    view! {
        <aside class=move || if collapsed.get() { "sidebar collapsed" } else { "sidebar" }>
            <div class="sidebar-brand">
                <span class="brand-mark">"⚡"</span>
                <Show when=move || !collapsed.get()>
                    <div>
                        <h1>{brand.name.clone()}</h1>
                        <p class="brand-tagline">{brand.tagline.clone()}</p>
                    </div>
                </Show>
            </div>

            <nav class="sidebar-nav">
                <ul>
                    {Route::NAV.into_iter().map(|route| {
                        let is_active = move || route.is_active(&location.pathname.get());
                        view! {
                            <li>
                                <a
                                    href=route.path()
                                    class=move || if is_active() { "nav-item active" } else { "nav-item" }
                                    title=route.label()
                                >
                                    <span class="nav-icon">{route.icon()}</span>
                                    <Show when=move || !collapsed.get()>
                                        <span class="nav-label">{route.label()}</span>
                                    </Show>
                                </a>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </nav>

            <div class="sidebar-footer">
                {move || match ctx.session.get() {
                    Some(session) => view! {
                        <div class="user-panel">
                            <span class="user-name">{session.display_name().to_string()}</span>
                            <span class="user-role">{session.role.label()}</span>
                            <button class="link-btn" on:click=move |_| ctx.sign_out()>"Sign out"</button>
                        </div>
                    }.into_any(),
                    None => view! {
                        <a class="nav-item" href=Route::Login.path()>{Route::Login.label()}</a>
                    }.into_any(),
                }}
                <button class="icon-btn collapse-btn" on:click=move |_| set_collapsed.update(|c| *c = !*c)>
                    {move || if collapsed.get() { "»" } else { "«" }}
                </button>
            </div>
        </aside>
    }
}
