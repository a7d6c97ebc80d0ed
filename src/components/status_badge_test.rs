use super::*;

#[test]
fn request_status_tones() {
    assert_eq!(request_status_tone(RequestStatus::Open), Tone::Warning);
    assert_eq!(request_status_tone(RequestStatus::Booked), Tone::Info);
    assert_eq!(request_status_tone(RequestStatus::Completed), Tone::Success);
    assert_eq!(request_status_tone(RequestStatus::Unknown), Tone::Success);
}

#[test]
fn urgency_tones_escalate() {
    assert_eq!(urgency_tone(Urgency::Low), Tone::Secondary);
    assert_eq!(urgency_tone(Urgency::Medium), Tone::Info);
    assert_eq!(urgency_tone(Urgency::High), Tone::Warning);
    assert_eq!(urgency_tone(Urgency::Urgent), Tone::Danger);
    assert_eq!(urgency_tone(Urgency::Critical), Tone::Danger);
}

#[test]
fn booking_status_tones() {
    assert_eq!(booking_status_tone(BookingStatus::Confirmed), Tone::Info);
    assert_eq!(booking_status_tone(BookingStatus::InProgress), Tone::Success);
}

#[test]
fn tone_class_uses_modifier() {
    assert_eq!(Tone::Danger.class(), "status-badge status-badge--danger");
}

#[test]
fn labels_are_human_readable() {
    assert_eq!(BookingStatus::InProgress.label(), "In Progress");
    assert_eq!(RequestStatus::Open.label(), "Open");
}
