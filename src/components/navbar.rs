//! Top navigation bar with role-specific links and the logout action.
//!
//! SYSTEM CONTEXT
//! ==============
//! Rendered above every route. It reads the shared `AuthState` signal, so it
//! follows sign-in and sign-out from this tab and from other tabs without
//! any wiring of its own.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::routes::{self, nav_links};
use crate::state::auth::use_auth;

#[component]
pub fn Navbar() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let on_logout = move |_| {
        auth.store().logout();
        navigate(routes::LOGIN, NavigateOptions::default());
    };

    let signed_in = move || auth.state.get().signed_in_user().is_some();
    let user_name = move || {
        auth.state
            .get()
            .signed_in_user()
            .map(|u| u.name.clone())
            .unwrap_or_default()
    };
    let role_name = move || auth.state.get().role().map(|r| r.as_str()).unwrap_or_default();
    let links = move || {
        auth.state.get().role().map(|role| {
            nav_links(role)
                .iter()
                .map(|link| view! { <a class="navbar__link" href=link.path>{link.label}</a> })
                .collect_view()
        })
    };

    view! {
        <nav class="navbar">
            <a class="navbar__brand" href=routes::HOME>"ServiceMarket"</a>
            <Show
                when=signed_in
                fallback=move || {
                    (!auth.state.get().loading)
                        .then(|| {
                            view! {
                                <div class="navbar__links">
                                    <a class="navbar__link" href=routes::LOGIN>"Login"</a>
                                </div>
                            }
                        })
                }
            >
                <div class="navbar__links">{links}</div>
                <div class="navbar__user">
                    <a class="navbar__link" href=routes::PROFILE>{user_name}</a>
                    <span class="navbar__role">{role_name}</span>
                    <button class="navbar__logout" on:click=on_logout.clone()>"Logout"</button>
                </div>
            </Show>
        </nav>
    }
}
