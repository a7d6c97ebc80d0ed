use serde_json::json;

use super::*;

// =============================================================
// Role
// =============================================================

#[test]
fn role_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Role::Customer).unwrap(), "\"customer\"");
    assert_eq!(serde_json::to_string(&Role::Worker).unwrap(), "\"worker\"");
    assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
}

#[test]
fn role_rejects_unknown_value() {
    assert!(serde_json::from_str::<Role>("\"superuser\"").is_err());
}

#[test]
fn role_display_matches_wire_name() {
    assert_eq!(Role::Worker.to_string(), "worker");
}

// =============================================================
// User
// =============================================================

#[test]
fn user_deserializes_backend_shape() {
    let user: User = serde_json::from_value(json!({
        "id": 7,
        "name": "Ana",
        "email": "ana@example.com",
        "role": "worker",
        "createdAt": "2024-05-01T10:00:00Z",
        "active": false,
        "password": null
    }))
    .unwrap();
    assert_eq!(user.id, "7");
    assert_eq!(user.role, Role::Worker);
    assert_eq!(user.created_at.as_deref(), Some("2024-05-01T10:00:00Z"));
    assert!(!user.active);
    assert!(user.phone.is_none());
}

#[test]
fn user_active_defaults_to_true() {
    let user: User = serde_json::from_value(json!({
        "id": "u-1", "name": "Bo", "email": "bo@example.com", "role": "customer"
    }))
    .unwrap();
    assert!(user.active);
    assert!(user.created_at.is_none());
}

#[test]
fn user_rejects_fractional_id() {
    let result = serde_json::from_value::<User>(json!({
        "id": 1.5, "name": "Bo", "email": "bo@example.com", "role": "customer"
    }));
    assert!(result.is_err());
}

#[test]
fn user_serializes_camel_case_without_empty_optionals() {
    let user = User {
        id: "1".to_owned(),
        name: "Ana".to_owned(),
        email: "ana@example.com".to_owned(),
        role: Role::Admin,
        created_at: Some("2024-01-01".to_owned()),
        active: true,
        phone: None,
        address: None,
    };
    let value = serde_json::to_value(&user).unwrap();
    assert_eq!(value["createdAt"], "2024-01-01");
    assert_eq!(value["role"], "admin");
    assert!(value.get("phone").is_none());
}

// =============================================================
// Marketplace records
// =============================================================

#[test]
fn login_response_carries_token_and_user() {
    let resp: LoginResponse = serde_json::from_value(json!({
        "token": "t.o.k",
        "user": { "id": 1, "name": "Ana", "email": "a@x.io", "role": "admin" }
    }))
    .unwrap();
    assert_eq!(resp.token, "t.o.k");
    assert_eq!(resp.user.role, Role::Admin);
}

#[test]
fn service_request_tolerates_missing_optional_fields() {
    let req: ServiceRequest = serde_json::from_value(json!({
        "id": 3, "title": "Fix sink", "status": "OPEN"
    }))
    .unwrap();
    assert_eq!(req.status, RequestStatus::Open);
    assert!(req.quotes.is_empty());
    assert!(req.urgency.is_none());
    assert_eq!(req.description, "");
}

#[test]
fn unknown_statuses_map_to_unknown() {
    let req: ServiceRequest = serde_json::from_value(json!({
        "id": 3, "title": "Fix sink", "status": "ARCHIVED", "urgency": "SOMEDAY"
    }))
    .unwrap();
    assert_eq!(req.status, RequestStatus::Unknown);
    assert_eq!(req.urgency, Some(Urgency::Unknown));
}

#[test]
fn booking_reads_nested_request_and_quote() {
    let booking: Booking = serde_json::from_value(json!({
        "id": 9,
        "status": "IN_PROGRESS",
        "serviceRequest": { "id": 3, "title": "Fix sink", "status": "BOOKED", "location": "Lisbon" },
        "customer": { "name": "Ana" },
        "quote": { "id": 4, "price": 120.5 },
        "rating": 5
    }))
    .unwrap();
    assert_eq!(booking.status, BookingStatus::InProgress);
    assert_eq!(booking.service_request.unwrap().location.as_deref(), Some("Lisbon"));
    assert_eq!(booking.quote.unwrap().price, 120.5);
    assert_eq!(booking.rating, Some(5));
}

#[test]
fn platform_stats_defaults_missing_counters() {
    let stats: PlatformStats = serde_json::from_value(json!({ "totalUsers": 12, "totalRevenue": 99.5 })).unwrap();
    assert_eq!(stats.total_users, 12);
    assert_eq!(stats.workers, 0);
    assert_eq!(stats.total_revenue, 99.5);
}

#[test]
fn page_reads_content_and_totals() {
    let page: Page<UserSummary> = serde_json::from_value(json!({
        "content": [{ "name": "Ana" }, { "name": "Bo" }],
        "totalPages": 3,
        "totalElements": 25,
        "number": 0
    }))
    .unwrap();
    assert_eq!(page.content.len(), 2);
    assert_eq!(page.total_pages, 3);
}

#[test]
fn flat_quote_shape_is_accepted() {
    let quote: Quote = serde_json::from_value(json!({
        "id": 4,
        "price": 150,
        "workerName": "Wes",
        "description": "Can start Monday",
        "estimatedDuration": 3
    }))
    .unwrap();
    assert_eq!(quote.worker_label(), "Wes");
    assert_eq!(quote.note(), Some("Can start Monday"));
    assert_eq!(quote.duration_label().as_deref(), Some("3"));
}

#[test]
fn nested_quote_shape_prefers_worker_record() {
    let quote: Quote = serde_json::from_value(json!({
        "id": 4, "price": 90.0, "worker": { "name": "Ana" }, "workerName": "ignored", "estimatedDays": 2
    }))
    .unwrap();
    assert_eq!(quote.worker_label(), "Ana");
    assert_eq!(quote.duration_label().as_deref(), Some("2 day(s)"));
}

#[test]
fn critical_urgency_round_trips_through_form_value() {
    assert_eq!(serde_json::from_value::<Urgency>(json!("CRITICAL")).unwrap(), Urgency::Critical);
    assert_eq!(Urgency::from_form("CRITICAL"), Some(Urgency::Critical));
    assert_eq!(Urgency::from_form("SOMEDAY"), None);
}

// =============================================================
// Write bodies
// =============================================================

#[test]
fn new_booking_sends_numeric_ids_as_numbers() {
    let body = NewBooking { request_id: "3".to_owned(), quote_id: "q-7".to_owned() };
    assert_eq!(serde_json::to_value(&body).unwrap(), json!({ "requestId": 3, "quoteId": "q-7" }));
}

#[test]
fn new_service_request_uses_backend_field_names() {
    let body = NewServiceRequest {
        title: "Fix sink".to_owned(),
        description: "Leaking".to_owned(),
        category: "Plumbing".to_owned(),
        urgency: Urgency::High,
        location: "Lisbon".to_owned(),
        photo_url: None,
    };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value["urgency"], "HIGH");
    assert!(value.get("photoUrl").is_none());
}

#[test]
fn completion_and_quote_bodies_are_camel_case() {
    let completion = BookingCompletion { payment_amount: 120.5, feedback: "Great".to_owned(), rating: 5 };
    assert_eq!(
        serde_json::to_value(&completion).unwrap(),
        json!({ "paymentAmount": 120.5, "feedback": "Great", "rating": 5 })
    );
    let quote = NewQuote {
        request_id: "9".to_owned(),
        price: 80.0,
        description: "Two visits".to_owned(),
        estimated_duration: "2 days".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&quote).unwrap(),
        json!({ "requestId": 9, "price": 80.0, "description": "Two visits", "estimatedDuration": "2 days" })
    );
}

#[test]
fn listing_accepts_page_or_bare_array() {
    let paged: Listing<UserSummary> = serde_json::from_value(json!({ "content": [{ "name": "Ana" }] })).unwrap();
    assert_eq!(paged.into_items().len(), 1);
    let plain: Listing<UserSummary> = serde_json::from_value(json!([{ "name": "Ana" }, { "name": "Bo" }])).unwrap();
    assert_eq!(plain.into_items().len(), 2);
}
