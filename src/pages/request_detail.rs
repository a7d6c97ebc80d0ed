//! One of the customer's requests with its quotes, and accepting a quote.
//!
//! SYSTEM CONTEXT
//! ==============
//! Accepting a quote posts a booking for the request. The backend then marks
//! the request booked, so the page only offers acceptance while the request
//! is still open. After a successful booking the customer lands on their
//! bookings list.

#[cfg(test)]
#[path = "request_detail_test.rs"]
mod request_detail_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_params_map};

use crate::components::request_card::format_price;
use crate::components::status_badge::{RequestStatusBadge, UrgencyBadge};
use crate::net::api::ApiError;
use crate::net::types::{NewBooking, Quote, RequestStatus, ServiceRequest};
use crate::routes::{CUSTOMER_BOOKINGS, CUSTOMER_REQUESTS};
use crate::state::auth::use_auth;

fn can_accept_quotes(status: RequestStatus) -> bool {
    status == RequestStatus::Open
}

fn booking_for(request_id: &str, quote: &Quote) -> NewBooking {
    NewBooking { request_id: request_id.to_owned(), quote_id: quote.id.clone() }
}

/// Quotes listed separately win; the request's embedded quotes are the
/// fallback when the listing comes back empty.
fn quotes_to_show(request: &ServiceRequest, listed: Vec<Quote>) -> Vec<Quote> {
    if listed.is_empty() { request.quotes.clone() } else { listed }
}

#[component]
pub fn ServiceRequestDetailPage() -> impl IntoView {
    let auth = use_auth();
    let params = use_params_map();
    let request_id = Memo::new(move |_| params.read().get("id").unwrap_or_default());

    let details = LocalResource::new(move || {
        let api = auth.api();
        let id = request_id.get();
        async move {
            let request = api.fetch_request_details(&id).await?;
            let quotes = api.fetch_quotes_for_request(&id).await?;
            Ok::<_, ApiError>((request, quotes))
        }
    });
    let selected = RwSignal::new(None::<Quote>);
    let error = RwSignal::new(String::new());

    view! {
        <div class="detail-page">
            <a class="btn" href=CUSTOMER_REQUESTS>"Back to Requests"</a>
            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading request..."</p> }>
                {move || {
                    details
                        .get()
                        .map(|result| match result {
                            Ok((request, listed)) => {
                                let quotes = quotes_to_show(&request, listed);
                                view! { <RequestDetail request=request quotes=quotes selected=selected/> }.into_any()
                            }
                            Err(e) => view! { <p class="page-error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
            <ConfirmBooking request_id=request_id selected=selected error=error/>
        </div>
    }
}

#[component]
fn RequestDetail(request: ServiceRequest, quotes: Vec<Quote>, selected: RwSignal<Option<Quote>>) -> impl IntoView {
    let open = can_accept_quotes(request.status);
    let heading = format!("Quotes ({})", quotes.len());
    let field = |label: &'static str, value: Option<String>| {
        value.map(|v| {
            view! {
                <p class="card__meta">
                    <strong>{label}</strong>
                    " "
                    {v}
                </p>
            }
        })
    };

    view! {
        <article class="card">
            <header class="card__header">
                <h1 class="card__title">{request.title.clone()}</h1>
                <RequestStatusBadge status=request.status/>
                {request.urgency.map(|urgency| view! { <UrgencyBadge urgency=urgency/> })}
            </header>
            {field("Category:", request.category.clone())}
            {field("Location:", request.location.clone())}
            {field("Created:", request.created_at.clone())}
            <p class="card__body">{request.description.clone()}</p>
        </article>
        <h2>{heading}</h2>
        {if quotes.is_empty() {
            view! { <p class="list-page__empty">"No quotes have been submitted for this request yet."</p> }.into_any()
        } else {
            quotes
                .into_iter()
                .map(|quote| {
                    let pick = quote.clone();
                    view! {
                        <article class="card quote-card">
                            <h3 class="card__title">{quote.worker_label().to_owned()}</h3>
                            {quote.note().map(|n| view! { <p class="card__body">{n.to_owned()}</p> })}
                            {quote.duration_label().map(|d| view! { <p class="card__meta">{format!("Estimated: {d}")}</p> })}
                            <p class="quote-card__price">{format_price(quote.price)}</p>
                            {open.then(|| {
                                view! {
                                    <button class="btn btn--primary" on:click=move |_| selected.set(Some(pick.clone()))>
                                        "Book Now"
                                    </button>
                                }
                            })}
                        </article>
                    }
                })
                .collect_view()
                .into_any()
        }}
    }
}

/// Confirmation panel for the picked quote. Confirming posts the booking.
#[component]
fn ConfirmBooking(
    request_id: Memo<String>,
    selected: RwSignal<Option<Quote>>,
    error: RwSignal<String>,
) -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();
    let busy = RwSignal::new(false);

    let on_confirm = move |_: leptos::ev::MouseEvent| {
        let Some(quote) = selected.get_untracked() else {
            return;
        };
        if busy.get_untracked() {
            return;
        }
        let booking = booking_for(&request_id.get_untracked(), &quote);
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.api().create_booking(&booking).await {
                    Ok(_) => {
                        selected.set(None);
                        navigate(CUSTOMER_BOOKINGS, NavigateOptions::default());
                    }
                    Err(e) => error.set(e.message_or("Failed to create booking")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (booking, &navigate, &auth, CUSTOMER_BOOKINGS);
            busy.set(false);
        }
    };

    move || {
        selected.get().map(|quote| {
            let on_confirm = on_confirm.clone();
            view! {
                <div class="confirm-panel">
                    <h3>"Confirm Booking"</h3>
                    <p>
                        "Book " <strong>{quote.worker_label().to_owned()}</strong> " for "
                        <strong>{format_price(quote.price)}</strong>
                    </p>
                    {quote.duration_label().map(|d| view! { <p class="card__meta">{format!("Estimated duration: {d}")}</p> })}
                    <div class="form__actions">
                        <button class="btn" on:click=move |_| selected.set(None)>"Cancel"</button>
                        <button class="btn btn--primary" disabled=move || busy.get() on:click=on_confirm>
                            {move || if busy.get() { "Booking..." } else { "Confirm Booking" }}
                        </button>
                    </div>
                </div>
            }
        })
    }
}
