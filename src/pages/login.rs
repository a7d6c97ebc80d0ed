//! Email + password sign-in.
//!
//! SYSTEM CONTEXT
//! ==============
//! On success the returned token and user are written through
//! `SessionStore::login`, which notifies every auth-aware view, and the user
//! is sent to the landing page of their role. A session established in
//! another tab while this page is open redirects the same way.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::api::ApiError;
use crate::net::types::LoginRequest;
use crate::routes::landing_path;
use crate::state::auth::use_auth;

fn validate_login_input(email: &str, password: &str) -> Result<LoginRequest, &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter your email and password.");
    }
    if !email.contains('@') {
        return Err("Enter a valid email address.");
    }
    Ok(LoginRequest { email: email.to_owned(), password: password.to_owned() })
}

/// Rejected credentials arrive as a 401 carrying the backend's reason; that
/// reason is shown as-is rather than as an expired session.
#[cfg(any(test, feature = "hydrate"))]
fn login_failure_message(err: &ApiError) -> String {
    err.message_or("Login failed")
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let navigate_signed_in = navigate.clone();
    Effect::new(move || {
        if let Some(role) = auth.state.get().role() {
            navigate_signed_in(landing_path(role), NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_login_input(&email.get(), &password.get()) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.api().login(&request).await {
                    Ok(session) => match auth.store().login(&session) {
                        Ok(()) => navigate(landing_path(session.user.role), NavigateOptions::default()),
                        Err(e) => {
                            leptos::logging::warn!("[login] session not stored: {e}");
                            error.set("Could not save your session. Check that site storage is enabled.".to_owned());
                        }
                    },
                    Err(e) => error.set(login_failure_message(&e)),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate);
            busy.set(false);
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h1>"Sign In"</h1>
                <p class="login-card__subtitle">"ServiceMarket"</p>
                <form class="login-form" on:submit=on_submit>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="you@example.com"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                    />
                    <button class="login-button" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Signing in..." } else { "Sign In" }}
                    </button>
                </form>
                <Show when=move || !error.get().is_empty()>
                    <p class="login-message login-message--error">{move || error.get()}</p>
                </Show>
            </div>
        </div>
    }
}
