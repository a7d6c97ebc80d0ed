use super::*;

#[test]
fn stat_cards_list_counters_then_revenue() {
    let stats = PlatformStats {
        total_users: 12,
        customers: 7,
        workers: 4,
        admins: 1,
        total_requests: 30,
        open_requests: 9,
        booked_requests: 11,
        total_bookings: 15,
        completed_bookings: 10,
        total_revenue: 2450.5,
    };
    let cards = stat_cards(&stats);
    assert_eq!(cards.first(), Some(&StatCard { label: "Total Users", value: "12".to_owned() }));
    assert_eq!(cards.last(), Some(&StatCard { label: "Total Revenue", value: "$2450.50".to_owned() }));
    assert_eq!(cards.len(), 8);
}

#[test]
fn stat_cards_default_to_zero() {
    let cards = stat_cards(&PlatformStats::default());
    assert!(cards.iter().take(7).all(|c| c.value == "0"));
    assert_eq!(cards[7].value, "$0.00");
}

#[test]
fn page_label_is_one_based_and_hidden_for_single_page() {
    assert_eq!(page_label(0, 3), Some("Page 1 of 3".to_owned()));
    assert_eq!(page_label(2, 3), Some("Page 3 of 3".to_owned()));
    assert_eq!(page_label(0, 1), None);
    assert_eq!(page_label(0, 0), None);
}

#[test]
fn full_listing_page_may_have_more() {
    assert!(has_next_page(10, 10));
    assert!(!has_next_page(9, 10));
    assert!(!has_next_page(0, 10));
}

#[test]
fn booking_amount_prefers_payment_then_quote() {
    let mut booking: Booking = serde_json::from_value(serde_json::json!({
        "id": 1, "status": "COMPLETED", "quote": { "id": 2, "price": 75 }
    }))
    .unwrap();
    assert_eq!(booking_amount_label(&booking), "$75.00");
    booking.payment_amount = Some(90.0);
    assert_eq!(booking_amount_label(&booking), "$90.00");
    booking.payment_amount = None;
    booking.quote = None;
    assert_eq!(booking_amount_label(&booking), "-");
}

#[test]
fn request_status_filter_reads_form_values() {
    assert_eq!(RequestStatus::from_form("BOOKED"), Some(RequestStatus::Booked));
    assert_eq!(RequestStatus::from_form(""), None);
    assert_eq!(RequestStatus::from_form("UNKNOWN"), None);
}
