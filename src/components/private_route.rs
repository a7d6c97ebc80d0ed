//! Gate for routes that need a signed-in user, optionally of one role.
//!
//! The decision is recomputed from the auth signal whenever it changes, so a
//! logout in this tab or another one immediately swaps the guarded content for
//! a redirect.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::components::Redirect;

use crate::net::types::Role;
use crate::routes;
use crate::session::GuardDecision;
use crate::session::guard;
use crate::state::auth::use_auth;

#[component]
pub fn PrivateRoute(
    /// Role the user must hold. `None` admits any signed-in user.
    #[prop(optional)]
    required_role: Option<Role>,
    children: ChildrenFn,
) -> impl IntoView {
    let auth = use_auth();
    let decision = Memo::new(move |_| guard::evaluate(&auth.state.get(), required_role));

    move || match decision.get() {
        GuardDecision::Loading => view! { <div class="page-loading">"Loading..."</div> }.into_any(),
        GuardDecision::Allowed => children().into_any(),
        denied => {
            let path = denied.redirect_path().unwrap_or(routes::HOME);
            let options = NavigateOptions { replace: true, ..NavigateOptions::default() };
            view! { <Redirect path=path options=options/> }.into_any()
        }
    }
}
