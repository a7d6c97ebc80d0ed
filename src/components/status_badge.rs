//! Colored pills for request, urgency, and booking states.

#[cfg(test)]
#[path = "status_badge_test.rs"]
mod status_badge_test;

use leptos::prelude::*;

use crate::net::types::{BookingStatus, RequestStatus, Urgency};

/// Visual tone of a badge. Maps to a `status-badge--<tone>` modifier class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tone {
    Secondary,
    Info,
    Warning,
    Success,
    Danger,
}

impl Tone {
    fn modifier(self) -> &'static str {
        match self {
            Self::Secondary => "secondary",
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    #[must_use]
    pub fn class(self) -> String {
        format!("status-badge status-badge--{}", self.modifier())
    }
}

#[must_use]
pub fn request_status_tone(status: RequestStatus) -> Tone {
    match status {
        RequestStatus::Open => Tone::Warning,
        RequestStatus::Booked => Tone::Info,
        _ => Tone::Success,
    }
}

#[must_use]
pub fn urgency_tone(urgency: Urgency) -> Tone {
    match urgency {
        Urgency::Low => Tone::Secondary,
        Urgency::Medium => Tone::Info,
        Urgency::High => Tone::Warning,
        _ => Tone::Danger,
    }
}

#[must_use]
pub fn booking_status_tone(status: BookingStatus) -> Tone {
    match status {
        BookingStatus::Confirmed => Tone::Info,
        _ => Tone::Success,
    }
}

#[component]
pub fn StatusBadge(tone: Tone, label: &'static str) -> impl IntoView {
    view! { <span class=tone.class()>{label}</span> }
}

#[component]
pub fn RequestStatusBadge(status: RequestStatus) -> impl IntoView {
    view! { <StatusBadge tone=request_status_tone(status) label=status.label()/> }
}

#[component]
pub fn UrgencyBadge(urgency: Urgency) -> impl IntoView {
    view! { <StatusBadge tone=urgency_tone(urgency) label=urgency.label()/> }
}

#[component]
pub fn BookingStatusBadge(status: BookingStatus) -> impl IntoView {
    view! { <StatusBadge tone=booking_status_tone(status) label=status.label()/> }
}
