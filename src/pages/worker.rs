//! Worker screens: open jobs to quote on and the worker's bookings.

#[cfg(test)]
#[path = "worker_test.rs"]
mod worker_test;

use leptos::prelude::*;

use crate::components::request_card::{BookingCard, QuoteList, RequestCard};
use crate::components::resource_list::ResourceList;
use crate::net::types::{Booking, NewQuote, Role, ServiceRequest};
use crate::state::auth::use_auth;

fn parse_quote(request_id: &str, price: &str, description: &str, duration: &str) -> Result<NewQuote, &'static str> {
    let price = price
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|p| p.is_finite() && *p > 0.0)
        .ok_or("Enter a price above zero.")?;
    let (description, duration) = (description.trim(), duration.trim());
    if description.is_empty() {
        return Err("Describe what the quote includes.");
    }
    if duration.is_empty() {
        return Err("Give an estimated duration.");
    }
    Ok(NewQuote {
        request_id: request_id.to_owned(),
        price,
        description: description.to_owned(),
        estimated_duration: duration.to_owned(),
    })
}

#[component]
pub fn WorkerRequestsPage() -> impl IntoView {
    let auth = use_auth();
    let requests = LocalResource::new(move || {
        let api = auth.api();
        async move { api.fetch_available_requests().await }
    });

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"Available Jobs"</h1>
            </header>
            <ResourceList
                resource=requests
                empty="No open requests right now. Check back soon."
                render=|request: ServiceRequest| {
                    let request_id = request.id.clone();
                    let title = request.title.clone();
                    view! {
                        <RequestCard request=request>
                            <CompetingQuotes request_id=request_id.clone()/>
                            <SubmitQuote request_id=request_id title=title/>
                        </RequestCard>
                    }
                }
            />
        </div>
    }
}

/// Quotes other workers have already placed on a request.
#[component]
fn CompetingQuotes(request_id: String) -> impl IntoView {
    let auth = use_auth();
    let expanded = RwSignal::new(false);
    let quotes = LocalResource::new(move || {
        let api = auth.api();
        let request_id = request_id.clone();
        let open = expanded.get();
        async move {
            if open { api.fetch_quotes_for_request(&request_id).await.map(Some) } else { Ok(None) }
        }
    });

    view! {
        <button class="btn" on:click=move |_| expanded.update(|open| *open = !*open)>
            {move || if expanded.get() { "Hide quotes" } else { "See quotes" }}
        </button>
        <Suspense fallback=move || view! { <p class="card__meta">"Loading quotes..."</p> }>
            {move || {
                quotes
                    .get()
                    .and_then(|result| match result {
                        Ok(Some(list)) => Some(view! { <QuoteList quotes=list/> }.into_any()),
                        Ok(None) => None,
                        Err(e) => Some(view! { <p class="page-error">{e.to_string()}</p> }.into_any()),
                    })
            }}
        </Suspense>
    }
}

/// Quote form for one open request, collapsed behind a button.
#[component]
fn SubmitQuote(request_id: String, title: String) -> impl IntoView {
    let auth = use_auth();
    let open = RwSignal::new(false);
    let submitted = RwSignal::new(false);
    let price = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let duration = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let request_id = StoredValue::new(request_id);
    let heading = format!("Submit Quote for: {title}");

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let quote = match parse_quote(&request_id.get_value(), &price.get(), &description.get(), &duration.get()) {
            Ok(quote) => quote,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.api().submit_quote(&quote).await {
                Ok(_) => {
                    open.set(false);
                    submitted.set(true);
                }
                Err(e) => error.set(e.message_or("Failed to submit quote")),
            }
            busy.set(false);
        });
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (quote, &auth);
            busy.set(false);
        }
    };

    view! {
        <Show when=move || submitted.get()>
            <p class="card__meta">"Quote submitted."</p>
        </Show>
        <Show
            when=move || open.get()
            fallback=move || {
                view! {
                    <button class="btn btn--primary" disabled=move || submitted.get() on:click=move |_| open.set(true)>
                        "Submit Quote"
                    </button>
                }
            }
        >
            <form class="form" on:submit=on_submit>
                <h4>{heading.clone()}</h4>
                <input
                    class="form__input"
                    type="number"
                    min="0.01"
                    step="0.01"
                    placeholder="Enter your price quote"
                    prop:value=move || price.get()
                    on:input=move |ev| price.set(event_target_value(&ev))
                />
                <textarea
                    class="form__input"
                    rows="3"
                    placeholder="Describe your approach and what's included"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <input
                    class="form__input"
                    placeholder="e.g., 2 hours, 1 day, 3-4 days"
                    prop:value=move || duration.get()
                    on:input=move |ev| duration.set(event_target_value(&ev))
                />
                <div class="form__actions">
                    <button class="btn" type="button" on:click=move |_| open.set(false)>"Cancel"</button>
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Submitting..." } else { "Submit Quote" }}
                    </button>
                </div>
                <Show when=move || !error.get().is_empty()>
                    <p class="page-error">{move || error.get()}</p>
                </Show>
            </form>
        </Show>
    }
}

#[component]
pub fn WorkerBookingsPage() -> impl IntoView {
    let auth = use_auth();
    let bookings = LocalResource::new(move || {
        let api = auth.api();
        async move { api.fetch_worker_bookings().await }
    });

    view! {
        <div class="list-page">
            <header class="list-page__header">
                <h1>"My Bookings"</h1>
            </header>
            <ResourceList
                resource=bookings
                empty="No bookings yet. Quotes you win show up here."
                render=|booking: Booking| view! { <BookingCard booking=booking viewer=Role::Worker/> }
            />
        </div>
    }
}
