//! Login Page
//!
//! Demo sign-in against the configured credential list. The check resolves
//! after a short simulated round trip, then opens the dashboard.

use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use blanq_core::auth::INVALID_CREDENTIALS;
use blanq_core::routes::Route;
use blanq_core::validation::{validate_login, FieldErrors};

use crate::components::{FieldError, TextField};
use crate::context::AppContext;

#[component]
pub fn LoginPage() -> impl IntoView {
    let ctx = expect_context::<AppContext>();
    let navigate = use_navigate();
    let (brand, tagline, delay, demo) = ctx.with_config(|c| {
        (c.brand.name.clone(), c.brand.tagline.clone(), c.auth.login_delay_ms, c.auth.credentials.clone())
    });

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let show_password = RwSignal::new(false);
    let errors = RwSignal::new(FieldErrors::new());
    let general_error = RwSignal::new(None::<String>);
    let (loading, set_loading) = signal(false);

    let submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if loading.get_untracked() {
            return;
        }
        general_error.set(None);
        let (email_value, password_value) = (email.get_untracked(), password.get_untracked());
        if let Err(e) = validate_login(&email_value, &password_value) {
            errors.set(e);
            return;
        }

        set_loading.set(true);
        let navigate = navigate.clone();
        spawn_local(async move {
            TimeoutFuture::new(delay).await;
            let result = ctx.sign_in(&email_value, &password_value);
            set_loading.set(false);
            match result {
                Ok(_) => navigate(Route::Dashboard.path(), Default::default()),
                Err(e) => {
                    log::info!("sign in rejected for {}: {}", email_value, e);
                    general_error.set(Some(INVALID_CREDENTIALS.to_string()));
                }
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <header class="login-header">
                    <h1>{brand}</h1>
                    <p class="muted">{tagline}</p>
                    <h2>"Sign in to your account"</h2>
                </header>

                <form on:submit=submit>
                    {move || general_error.get().map(|message| view! {
                        <div class="alert error">{message}</div>
                    })}
                    <TextField label="Email Address" field="email" input_type="email" required=true errors=errors
                        placeholder="you@company.com"
                        value=email
                        on_input=move |v: String| {
                            general_error.set(None);
                            email.set(v);
                        } />
                    <label class="form-field">
                        <span class="form-label">"Password" <span class="required">" *"</span></span>
                        <div class="inline-add">
                            <input
                                name="password"
                                type=move || if show_password.get() { "text" } else { "password" }
                                class=move || if errors.with(|e| e.contains("password")) { "input invalid" } else { "input" }
                                placeholder="Enter your password"
                                prop:value=move || password.get()
                                on:input=move |ev| {
                                    errors.update(|e| e.clear_field("password"));
                                    general_error.set(None);
                                    password.set(event_target_value(&ev));
                                }
                            />
                            <button class="icon-btn" type="button" on:click=move |_| show_password.update(|s| *s = !*s)>
                                {move || if show_password.get() { "Hide" } else { "Show" }}
                            </button>
                        </div>
                        <FieldError errors=errors field="password" />
                    </label>
                    <button class="btn primary block" type="submit" disabled=move || loading.get()>
                        {move || if loading.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>

                <section class="demo-credentials">
                    <h4>"Demo credentials"</h4>
                    <ul>
                        {demo.into_iter().map(|c| {
                            let (fill_email, fill_password) = (c.email.clone(), c.password.clone());
                            view! {
                                <li>
                                    <button class="btn link" type="button" on:click=move |_| {
                                        errors.set(FieldErrors::new());
                                        general_error.set(None);
                                        email.set(fill_email.clone());
                                        password.set(fill_password.clone());
                                    }>
                                        <span class="strong">{c.role.label()}</span>
                                        " " {c.email} " / " {c.password}
                                    </button>
                                </li>
                            }
                        }).collect_view()}
                    </ul>
                </section>

                <footer class="login-footer muted small">
                    "Compliant with Quebec Law 25 privacy requirements"
                </footer>
            </div>
        </div>
    }
}
