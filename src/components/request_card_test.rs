use super::*;
use crate::net::types::BookingStatus;

fn booking() -> Booking {
    Booking {
        id: "b1".to_owned(),
        status: BookingStatus::Confirmed,
        service_request: None,
        customer: Some(UserSummary { name: "Cara".to_owned(), email: None }),
        worker: Some(UserSummary { name: "Wes".to_owned(), email: None }),
        quote: None,
        created_at: None,
        rating: None,
        feedback: None,
        payment_amount: None,
    }
}

#[test]
fn format_price_uses_two_decimals() {
    assert_eq!(format_price(1234.5), "$1234.50");
    assert_eq!(format_price(0.0), "$0.00");
}

#[test]
fn quote_summary_pluralizes() {
    assert_eq!(quote_summary(0), "No quotes yet");
    assert_eq!(quote_summary(1), "1 quote");
    assert_eq!(quote_summary(3), "3 quotes");
}

#[test]
fn counterpart_depends_on_viewer() {
    let b = booking();
    assert_eq!(counterpart(&b, Role::Customer).map(|(l, u)| (l, u.name.as_str())), Some(("Worker", "Wes")));
    assert_eq!(counterpart(&b, Role::Worker).map(|(l, u)| (l, u.name.as_str())), Some(("Customer", "Cara")));
    assert!(counterpart(&b, Role::Admin).is_none());
}

#[test]
fn booking_amount_prefers_payment_over_quote() {
    let mut b = booking();
    assert_eq!(b.amount(), None);
    b.quote = serde_json::from_value(serde_json::json!({ "id": 4, "price": 80.0 })).unwrap();
    assert_eq!(b.amount(), Some(80.0));
    b.payment_amount = Some(95.0);
    assert_eq!(b.amount(), Some(95.0));
}
