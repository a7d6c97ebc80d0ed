//! Cards for service requests, quotes, and bookings.

#[cfg(test)]
#[path = "request_card_test.rs"]
mod request_card_test;

use leptos::prelude::*;

use super::status_badge::{BookingStatusBadge, RequestStatusBadge, UrgencyBadge};
use crate::net::types::{Booking, Quote, Role, ServiceRequest, UserSummary};

/// `$1234.50` style amount.
#[must_use]
pub fn format_price(amount: f64) -> String {
    format!("${amount:.2}")
}

#[must_use]
pub fn quote_summary(count: usize) -> String {
    match count {
        0 => "No quotes yet".to_owned(),
        1 => "1 quote".to_owned(),
        n => format!("{n} quotes"),
    }
}

/// The other party on a booking, as seen by `viewer`.
#[must_use]
pub fn counterpart(booking: &Booking, viewer: Role) -> Option<(&'static str, &UserSummary)> {
    match viewer {
        Role::Customer => booking.worker.as_ref().map(|w| ("Worker", w)),
        Role::Worker => booking.customer.as_ref().map(|c| ("Customer", c)),
        Role::Admin => None,
    }
}

#[component]
pub fn RequestCard(request: ServiceRequest, #[prop(optional)] children: Option<Children>) -> impl IntoView {
    let meta = [request.category.clone(), request.location.clone()]
        .into_iter()
        .flatten()
        .collect::<Vec<_>>()
        .join(" · ");

    view! {
        <article class="card">
            <header class="card__header">
                <h3 class="card__title">{request.title}</h3>
                <RequestStatusBadge status=request.status/>
                {request.urgency.map(|urgency| view! { <UrgencyBadge urgency=urgency/> })}
            </header>
            <p class="card__body">{request.description}</p>
            <p class="card__meta">{meta}</p>
            <p class="card__meta">{quote_summary(request.quotes.len())}</p>
            {children.map(|c| c())}
        </article>
    }
}

#[component]
pub fn QuoteList(quotes: Vec<Quote>) -> impl IntoView {
    if quotes.is_empty() {
        return view! { <p class="card__meta">{quote_summary(0)}</p> }.into_any();
    }
    view! {
        <ul class="quote-list">
            {quotes
                .into_iter()
                .map(|q| {
                    let who = q.worker_label().to_owned();
                    let duration = q.duration_label();
                    let note = q.note().map(str::to_owned);
                    view! {
                        <li class="quote-list__item">
                            <span class="quote-list__worker">{who}</span>
                            <span class="quote-list__price">{format_price(q.price)}</span>
                            {duration.map(|d| view! { <span class="quote-list__days">{d}</span> })}
                            {note.map(|m| view! { <p class="quote-list__message">{m}</p> })}
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
        .into_any()
}

#[component]
pub fn BookingCard(booking: Booking, viewer: Role) -> impl IntoView {
    let party = counterpart(&booking, viewer).map(|(label, who)| format!("{label}: {}", who.name));
    let price = booking.amount().map(format_price);
    let title = booking
        .service_request
        .as_ref()
        .map_or_else(|| format!("Booking #{}", booking.id), |r| r.title.clone());
    let rating = booking.rating.map(|r| format!("Rated {r}/5"));

    view! {
        <article class="card">
            <header class="card__header">
                <h3 class="card__title">{title}</h3>
                <BookingStatusBadge status=booking.status/>
            </header>
            {party.map(|p| view! { <p class="card__meta">{p}</p> })}
            {price.map(|p| view! { <p class="card__meta">{p}</p> })}
            {booking.created_at.map(|at| view! { <p class="card__meta">{format!("Booked {at}")}</p> })}
            {rating.map(|r| view! { <p class="card__meta">{r}</p> })}
            {booking.feedback.map(|f| view! { <p class="card__body">{f}</p> })}
        </article>
    }
}
