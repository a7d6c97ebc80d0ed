use super::*;

#[test]
fn landing_path_per_role() {
    assert_eq!(landing_path(Role::Admin), "/admin/dashboard");
    assert_eq!(landing_path(Role::Worker), "/worker/requests");
    assert_eq!(landing_path(Role::Customer), "/customer/requests");
}

#[test]
fn nav_links_start_with_landing_path() {
    for role in [Role::Customer, Role::Worker, Role::Admin] {
        assert_eq!(nav_links(role)[0].path, landing_path(role));
    }
}

#[test]
fn nav_links_stay_within_role_section() {
    assert!(nav_links(Role::Customer).iter().all(|l| l.path.starts_with("/customer/")));
    assert!(nav_links(Role::Worker).iter().all(|l| l.path.starts_with("/worker/")));
    assert!(nav_links(Role::Admin).iter().all(|l| l.path.starts_with("/admin/")));
}

#[test]
fn request_detail_path_nests_under_requests() {
    assert_eq!(request_detail_path("14"), "/customer/requests/14");
    assert_eq!(CUSTOMER_NEW_REQUEST, "/customer/requests/new");
}
