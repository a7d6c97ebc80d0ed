use leptos_axum::generate_route_list;
use servicemarket_client::app::App;

use super::*;

#[tokio::test]
async fn router_uses_configured_site_addr() {
    let (_app, addr) = host::router().expect("router");
    assert_eq!(addr.port(), 3000);
}

#[tokio::test]
async fn every_app_route_is_rendered_server_side() {
    let paths: Vec<String> = generate_route_list(App).iter().map(|r| r.path().to_owned()).collect();
    for expected in ["/login", "/profile", "/customer/requests/new", "/customer/bookings", "/admin/dashboard"] {
        assert!(paths.iter().any(|p| p == expected), "missing {expected} in {paths:?}");
    }
}
