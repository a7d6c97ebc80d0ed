//! Profile of the signed-in user.
//!
//! Renders the stored user immediately and refreshes it from
//! `/auth/profile`. A fresher record is written back through the session
//! store, which is the only session mutation besides login and logout.

use leptos::prelude::*;

use crate::state::auth::use_auth;

#[component]
pub fn ProfilePage() -> impl IntoView {
    let auth = use_auth();
    let profile = LocalResource::new(move || {
        let api = auth.api();
        async move { api.fetch_profile().await }
    });

    Effect::new(move || {
        let Some(Ok(fresh)) = profile.get() else {
            return;
        };
        let stored = auth.state.get_untracked().user;
        if stored.as_ref() != Some(&fresh) {
            auth.store().set_user(&fresh);
        }
    });

    let field = |label: &'static str, value: Option<String>| {
        view! {
            <div class="profile-card__row">
                <span class="profile-card__label">{label}</span>
                <span class="profile-card__value">{value.unwrap_or_else(|| "-".to_owned())}</span>
            </div>
        }
    };

    view! {
        <div class="profile-page">
            <h1>"My Profile"</h1>
            {move || {
                auth.state
                    .get()
                    .user
                    .map(|user| {
                        view! {
                            <div class="profile-card">
                                {field("Name", Some(user.name))}
                                {field("Email", Some(user.email))}
                                {field("Role", Some(user.role.to_string()))}
                                {field("Phone", user.phone)}
                                {field("Address", user.address)}
                                {field("Member since", user.created_at)}
                                {field("Status", Some(if user.active { "Active" } else { "Inactive" }.to_owned()))}
                            </div>
                        }
                    })
            }}
            {move || {
                profile
                    .get()
                    .and_then(Result::err)
                    .map(|e| view! { <p class="page-error">{format!("Could not refresh profile: {e}")}</p> })
            }}
        </div>
    }
}
