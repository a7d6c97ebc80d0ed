//! Public landing page.

use leptos::prelude::*;

use crate::routes::{self, landing_path};
use crate::state::auth::use_auth;

#[component]
pub fn HomePage() -> impl IntoView {
    let auth = use_auth();
    let dashboard = move || auth.state.get().role().map(landing_path);

    view! {
        <div class="home-page">
            <section class="home-page__hero">
                <h1>"ServiceMarket"</h1>
                <p>"Post a job, compare quotes from local workers, and book the one you like."</p>
                <Show
                    when=move || dashboard().is_some()
                    fallback=|| {
                        view! {
                            <div class="home-page__actions">
                                <a class="button button--primary" href=routes::LOGIN>"Get Started"</a>
                                <a class="button" href=routes::LOGIN>"Sign In"</a>
                            </div>
                        }
                    }
                >
                    <div class="home-page__actions">
                        <a class="button button--primary" href=move || dashboard().unwrap_or(routes::HOME)>
                            "Go to Dashboard"
                        </a>
                    </div>
                </Show>
            </section>
        </div>
    }
}
