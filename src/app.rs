//! Root application component with routing and the auth context.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::private_route::PrivateRoute;
use crate::net::types::Role;
use crate::pages::{
    admin::AdminDashboardPage,
    customer::{CustomerBookingsPage, CustomerRequestsPage},
    home::HomePage,
    login::LoginPage,
    not_found::NotFoundPage,
    profile::ProfilePage,
    request_detail::ServiceRequestDetailPage,
    request_form::CreateServiceRequestPage,
    worker::{WorkerBookingsPage, WorkerRequestsPage},
};
use crate::session::SessionStore;
use crate::state::auth::provide_auth_context;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Installs the session for this tab and sets up client-side routing. Every
/// private route sits behind `PrivateRoute`; `/profile` admits any role.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_auth_context(SessionStore::for_environment());

    view! {
        <Stylesheet id="leptos" href="/pkg/servicemarket.css"/>
        <Title text="ServiceMarket"/>

        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=NotFoundPage>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=StaticSegment("profile")
                        view=|| view! { <PrivateRoute><ProfilePage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("customer"), StaticSegment("requests"))
                        view=|| view! { <PrivateRoute required_role=Role::Customer><CustomerRequestsPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("customer"), StaticSegment("requests"), StaticSegment("new"))
                        view=|| view! { <PrivateRoute required_role=Role::Customer><CreateServiceRequestPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("customer"), StaticSegment("requests"), ParamSegment("id"))
                        view=|| view! { <PrivateRoute required_role=Role::Customer><ServiceRequestDetailPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("customer"), StaticSegment("bookings"))
                        view=|| view! { <PrivateRoute required_role=Role::Customer><CustomerBookingsPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("worker"), StaticSegment("requests"))
                        view=|| view! { <PrivateRoute required_role=Role::Worker><WorkerRequestsPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("worker"), StaticSegment("bookings"))
                        view=|| view! { <PrivateRoute required_role=Role::Worker><WorkerBookingsPage/></PrivateRoute> }
                    />
                    <Route
                        path=(StaticSegment("admin"), StaticSegment("dashboard"))
                        view=|| view! { <PrivateRoute required_role=Role::Admin><AdminDashboardPage/></PrivateRoute> }
                    />
                </Routes>
            </main>
        </Router>
    }
}
