//! Customer screens: own service requests and bookings.
//!
//! Quotes are reviewed and accepted on the request detail page. Confirmed
//! bookings are closed out here with payment, rating, and feedback.

#[cfg(test)]
#[path = "customer_test.rs"]
mod customer_test;

use leptos::prelude::*;

use crate::components::request_card::{BookingCard, RequestCard};
use crate::components::resource_list::ResourceList;
use crate::net::types::{Booking, BookingCompletion, BookingStatus, Role, ServiceRequest};
use crate::routes::{CUSTOMER_NEW_REQUEST, request_detail_path};
use crate::state::auth::use_auth;

const RATINGS: [(u8, &str); 5] = [(5, "5 - Excellent"), (4, "4 - Very Good"), (3, "3 - Good"), (2, "2 - Fair"), (1, "1 - Poor")];

fn can_complete(status: BookingStatus) -> bool {
    status == BookingStatus::Confirmed
}

fn parse_completion(amount: &str, rating: &str, feedback: &str) -> Result<BookingCompletion, &'static str> {
    let payment_amount = amount
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|a| a.is_finite() && *a > 0.0)
        .ok_or("Enter the amount paid.")?;
    let rating = rating
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|r| (1..=5).contains(r))
        .ok_or("Rate the work from 1 to 5.")?;
    Ok(BookingCompletion { payment_amount, feedback: feedback.trim().to_owned(), rating })
}

#[component]
pub fn CustomerRequestsPage() -> impl IntoView {
    let auth = use_auth();
    let requests = LocalResource::new(move || {
        let api = auth.api();
        async move { api.fetch_my_requests().await }
    });

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"My Service Requests"</h1>
                <a class="btn btn--primary" href=CUSTOMER_NEW_REQUEST>"New Request"</a>
            </header>
            <ResourceList
                resource=requests
                empty="You have not posted any service requests yet."
                render=|request: ServiceRequest| {
                    let href = request_detail_path(&request.id);
                    view! {
                        <RequestCard request=request>
                            <a class="btn" href=href>"View Details"</a>
                        </RequestCard>
                    }
                }
            />
        </div>
    }
}

#[component]
pub fn CustomerBookingsPage() -> impl IntoView {
    let auth = use_auth();
    let reload = RwSignal::new(0_u32);
    let bookings = LocalResource::new(move || {
        let api = auth.api();
        reload.track();
        async move { api.fetch_my_bookings().await }
    });
    let on_completed = Callback::new(move |()| reload.update(|n| *n += 1));

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"My Bookings"</h1>
            </header>
            <ResourceList
                resource=bookings
                empty="No bookings yet. Accept a quote to book a worker."
                render=move |booking: Booking| {
                    let completable = can_complete(booking.status);
                    let booking_id = booking.id.clone();
                    view! {
                        <BookingCard booking=booking viewer=Role::Customer/>
                        {completable.then(|| view! { <CompleteBooking booking_id=booking_id on_completed=on_completed/> })}
                    }
                }
            />
        </div>
    }
}

/// "Mark Complete" toggle and the completion form for a confirmed booking.
#[component]
fn CompleteBooking(booking_id: String, on_completed: Callback<()>) -> impl IntoView {
    let auth = use_auth();
    let open = RwSignal::new(false);
    let amount = RwSignal::new(String::new());
    let rating = RwSignal::new("5".to_owned());
    let feedback = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let booking_id = StoredValue::new(booking_id);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let completion = match parse_completion(&amount.get(), &rating.get(), &feedback.get()) {
            Ok(completion) => completion,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.api().complete_booking(&booking_id.get_value(), &completion).await {
                Ok(_) => {
                    open.set(false);
                    on_completed.run(());
                }
                Err(e) => error.set(e.message_or("Failed to complete booking")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (completion, &auth, booking_id, on_completed);
            busy.set(false);
        }
    };

    view! {
        <Show
            when=move || open.get()
            fallback=move || view! { <button class="btn btn--primary" on:click=move |_| open.set(true)>"Mark Complete"</button> }
        >
            <form class="form" on:submit=on_submit>
                <input
                    class="form__input"
                    type="number"
                    min="0.01"
                    step="0.01"
                    placeholder="Amount paid"
                    prop:value=move || amount.get()
                    on:input=move |ev| amount.set(event_target_value(&ev))
                />
                <select class="form__input" prop:value=move || rating.get() on:change=move |ev| rating.set(event_target_value(&ev))>
                    {RATINGS
                        .into_iter()
                        .map(|(value, label)| view! { <option value=value.to_string()>{label}</option> })
                        .collect_view()}
                </select>
                <textarea
                    class="form__input"
                    rows="3"
                    placeholder="How did it go?"
                    prop:value=move || feedback.get()
                    on:input=move |ev| feedback.set(event_target_value(&ev))
                ></textarea>
                <div class="form__actions">
                    <button class="btn" type="button" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Saving..." } else { "Complete Booking" }}
                    </button>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-error">{move || error.get()}</p>
                </Show>
            </form>
        </Show>
    }
}
