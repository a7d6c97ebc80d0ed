//! Admin dashboard: platform counters, user management, and moderation of
//! requests, bookings, and quotes.
//!
//! DESIGN
//! ======
//! Every table is a paged `LocalResource` keyed on its page number and a
//! reload counter. Status changes and deletions go straight to the backend
//! and bump the counter on success; nothing is updated optimistically.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;

use crate::components::request_card::format_price;
use crate::components::status_badge::{BookingStatusBadge, RequestStatusBadge};
use crate::net::types::{Booking, PlatformStats, Quote, RequestStatus, ServiceRequest, User};
use crate::state::auth::use_auth;

const USERS_PAGE_SIZE: u32 = 10;
const LISTING_PAGE_SIZE: u32 = 10;

#[derive(Clone, Debug, PartialEq, Eq)]
struct StatCard {
    label: &'static str,
    value: String,
}

fn stat_cards(stats: &PlatformStats) -> Vec<StatCard> {
    let count = |label, value: u64| StatCard { label, value: value.to_string() };
    vec![
        count("Total Users", stats.total_users),
        count("Customers", stats.customers),
        count("Workers", stats.workers),
        count("Total Requests", stats.total_requests),
        count("Open Requests", stats.open_requests),
        count("Total Bookings", stats.total_bookings),
        count("Completed Bookings", stats.completed_bookings),
        StatCard { label: "Total Revenue", value: format_price(stats.total_revenue) },
    ]
}

/// Listings that come back as bare arrays carry no totals; a full page is
/// taken to mean there may be another.
fn has_next_page(returned: usize, size: u32) -> bool {
    u32::try_from(returned).is_ok_and(|n| n >= size)
}

fn booking_amount_label(booking: &Booking) -> String {
    booking.amount().map_or_else(|| "-".to_owned(), format_price)
}

/// "Page 2 of 5", or nothing for a single page.
fn page_label(number: u32, total_pages: u32) -> Option<String> {
    (total_pages > 1).then(|| format!("Page {} of {total_pages}", number + 1))
}

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    let auth = use_auth();
    let stats = LocalResource::new(move || {
        let api = auth.api();
        async move { api.fetch_platform_stats().await }
    });

    view! {
        <div class="admin-page">
            <h1>"Admin Dashboard"</h1>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading statistics..."</p> }>
                {move || {
                    stats
                        .get()
                        .map(|result| match result {
                            Ok(stats) => {
                                view! {
                                    <div class="stat-grid">
                                        {stat_cards(&stats)
                                            .into_iter()
                                            .map(|card| {
                                                view! {
                                                    <div class="stat-card">
                                                        <span class="stat-card__value">{card.value}</span>
                                                        <span class="stat-card__label">{card.label}</span>
                                                    </div>
                                                }
                                            })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="page-error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
            <UserManagement/>
            <RequestModeration/>
            <BookingOverview/>
            <QuoteOverview/>
        </div>
    }
}

#[component]
fn UserManagement() -> impl IntoView {
    let auth = use_auth();
    let page = RwSignal::new(0_u32);
    let reload = RwSignal::new(0_u32);
    let action_error = RwSignal::new(String::new());

    let users = LocalResource::new(move || {
        let api = auth.api();
        let page = page.get();
        reload.track();
        async move { api.fetch_users(page, USERS_PAGE_SIZE).await }
    });

    let on_toggle = Callback::new(move |user: User| {
        action_error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.api().update_user_status(&user.id, !user.active).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => action_error.set(format!("Could not update {}: {e}", user.name)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = user;
    });

    let on_delete = Callback::new(move |user: User| {
        action_error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&format!("Delete {}?", user.name)).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match auth.api().delete_user(&user.id).await {
                    Ok(()) => reload.update(|n| *n += 1),
                    Err(e) => action_error.set(format!("Could not delete {}: {e}", user.name)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = user;
    });

    view! {
        <section class="user-admin">
            <h2>"Users"</h2>
            <Show when=move || !action_error.get().is_empty()>
                <p class="page-error">{move || action_error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading users..."</p> }>
                {move || {
                    users
                        .get()
                        .map(move |result| match result {
                            Ok(listing) => {
                                let pager = page_label(listing.number, listing.total_pages);
                                let last_page = listing.total_pages.saturating_sub(1);
                                view! {
                                    <table class="user-admin__table">
                                        <thead>
                                            <tr>
                                                <th>"Name"</th>
                                                <th>"Email"</th>
                                                <th>"Role"</th>
                                                <th>"Status"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {listing
                                                .content
                                                .into_iter()
                                                .map(move |user| view! { <UserRow user=user on_toggle=on_toggle on_delete=on_delete/> })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                    {pager.map(move |label| {
                                        view! {
                                            <div class="user-admin__pager">
                                                <button
                                                    class="btn"
                                                    disabled=move || page.get() == 0
                                                    on:click=move |_| page.update(|p| *p = p.saturating_sub(1))
                                                >
                                                    "Previous"
                                                </button>
                                                <span>{label}</span>
                                                <button
                                                    class="btn"
                                                    disabled=move || page.get() >= last_page
                                                    on:click=move |_| page.update(|p| *p = (*p + 1).min(last_page))
                                                >
                                                    "Next"
                                                </button>
                                            </div>
                                        }
                                    })}
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="page-error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn UserRow(user: User, on_toggle: Callback<User>, on_delete: Callback<User>) -> impl IntoView {
    let toggle_label = if user.active { "Deactivate" } else { "Activate" };
    let status = if user.active { "Active" } else { "Inactive" };
    let for_toggle = user.clone();
    let for_delete = user.clone();

    view! {
        <tr>
            <td>{user.name}</td>
            <td>{user.email}</td>
            <td>{user.role.as_str()}</td>
            <td>{status}</td>
            <td class="user-admin__actions">
                <button class="btn" on:click=move |_| on_toggle.run(for_toggle.clone())>{toggle_label}</button>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(for_delete.clone())>"Delete"</button>
            </td>
        </tr>
    }
}

/// Previous / next buttons for listings without totals.
#[component]
fn Pager(page: RwSignal<u32>, has_next: bool) -> impl IntoView {
    view! {
        <div class="user-admin__pager">
            <button class="btn" disabled=move || page.get() == 0 on:click=move |_| page.update(|p| *p = p.saturating_sub(1))>
                "Previous"
            </button>
            <span>{move || format!("Page {}", page.get() + 1)}</span>
            <button class="btn" disabled={!has_next} on:click=move |_| page.update(|p| *p += 1)>
                "Next"
            </button>
        </div>
    }
}

#[component]
fn RequestModeration() -> impl IntoView {
    let auth = use_auth();
    let page = RwSignal::new(0_u32);
    let filter = RwSignal::new(None::<RequestStatus>);
    let reload = RwSignal::new(0_u32);
    let action_error = RwSignal::new(String::new());

    let requests = LocalResource::new(move || {
        let api = auth.api();
        let (page, status) = (page.get(), filter.get());
        reload.track();
        async move { api.fetch_all_requests(page, LISTING_PAGE_SIZE, status).await }
    });

    let on_status = Callback::new(move |(request, status): (ServiceRequest, RequestStatus)| {
        action_error.set(String::new());
        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match auth.api().update_request_status(&request.id, status).await {
                Ok(()) => reload.update(|n| *n += 1),
                Err(e) => action_error.set(format!("Could not update {}: {e}", request.title)),
            }
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = (request, status);
    });

    let on_delete = Callback::new(move |request: ServiceRequest| {
        action_error.set(String::new());
        #[cfg(feature = "hydrate")]
        {
            let confirmed = web_sys::window()
                .and_then(|w| w.confirm_with_message(&format!("Delete {}?", request.title)).ok())
                .unwrap_or(false);
            if !confirmed {
                return;
            }
            leptos::task::spawn_local(async move {
                match auth.api().delete_request(&request.id).await {
                    Ok(()) => reload.update(|n| *n += 1),
                    Err(e) => action_error.set(format!("Could not delete {}: {e}", request.title)),
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = request;
    });

    view! {
        <section class="user-admin">
            <h2>"Service Requests"</h2>
            <select
                class="form__input"
                on:change=move |ev| {
                    filter.set(RequestStatus::from_form(&event_target_value(&ev)));
                    page.set(0);
                }
            >
                <option value="">"All statuses"</option>
                {RequestStatus::SETTABLE
                    .into_iter()
                    .map(|s| view! { <option value=s.as_str()>{s.label()}</option> })
                    .collect_view()}
            </select>
            <Show when=move || !action_error.get().is_empty()>
                <p class="page-error">{move || action_error.get()}</p>
            </Show>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading requests..."</p> }>
                {move || {
                    requests
                        .get()
                        .map(move |result| match result {
                            Ok(items) => {
                                let has_next = has_next_page(items.len(), LISTING_PAGE_SIZE);
                                view! {
                                    <table class="user-admin__table">
                                        <thead>
                                            <tr>
                                                <th>"Title"</th>
                                                <th>"Customer"</th>
                                                <th>"Category"</th>
                                                <th>"Status"</th>
                                                <th>"Created"</th>
                                                <th></th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {items
                                                .into_iter()
                                                .map(move |request| {
                                                    view! { <RequestRow request=request on_status=on_status on_delete=on_delete/> }
                                                })
                                                .collect_view()}
                                        </tbody>
                                    </table>
                                    <Pager page=page has_next=has_next/>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="page-error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn RequestRow(
    request: ServiceRequest,
    on_status: Callback<(ServiceRequest, RequestStatus)>,
    on_delete: Callback<ServiceRequest>,
) -> impl IntoView {
    let current = request.status;
    let for_status = request.clone();
    let for_delete = request.clone();

    view! {
        <tr>
            <td>{request.title}</td>
            <td>{request.customer.map(|c| c.name).unwrap_or_default()}</td>
            <td>{request.category.unwrap_or_default()}</td>
            <td><RequestStatusBadge status=current/></td>
            <td>{request.created_at.unwrap_or_default()}</td>
            <td class="user-admin__actions">
                <select
                    class="form__input"
                    on:change=move |ev| {
                        if let Some(status) = RequestStatus::from_form(&event_target_value(&ev)).filter(|s| *s != current) {
                            on_status.run((for_status.clone(), status));
                        }
                    }
                >
                    {RequestStatus::SETTABLE
                        .into_iter()
                        .map(|s| view! { <option value=s.as_str() selected={s == current}>{s.label()}</option> })
                        .collect_view()}
                </select>
                <button class="btn btn--danger" on:click=move |_| on_delete.run(for_delete.clone())>"Delete"</button>
            </td>
        </tr>
    }
}

#[component]
fn BookingOverview() -> impl IntoView {
    let auth = use_auth();
    let page = RwSignal::new(0_u32);
    let bookings = LocalResource::new(move || {
        let api = auth.api();
        let page = page.get();
        async move { api.fetch_all_bookings(page, LISTING_PAGE_SIZE, None).await }
    });

    view! {
        <section class="user-admin">
            <h2>"Bookings"</h2>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading bookings..."</p> }>
                {move || {
                    bookings
                        .get()
                        .map(move |result| match result {
                            Ok(items) => {
                                let has_next = has_next_page(items.len(), LISTING_PAGE_SIZE);
                                view! {
                                    <table class="user-admin__table">
                                        <thead>
                                            <tr>
                                                <th>"Service"</th>
                                                <th>"Customer"</th>
                                                <th>"Worker"</th>
                                                <th>"Amount"</th>
                                                <th>"Status"</th>
                                                <th>"Created"</th>
                                            </tr>
                                        </thead>
                                        <tbody>
                                            {items.into_iter().map(|booking| view! { <BookingRow booking=booking/> }).collect_view()}
                                        </tbody>
                                    </table>
                                    <Pager page=page has_next=has_next/>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="page-error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}

#[component]
fn BookingRow(booking: Booking) -> impl IntoView {
    let amount = booking_amount_label(&booking);
    view! {
        <tr>
            <td>{booking.service_request.map(|r| r.title).unwrap_or_default()}</td>
            <td>{booking.customer.map(|c| c.name).unwrap_or_default()}</td>
            <td>{booking.worker.map(|w| w.name).unwrap_or_default()}</td>
            <td>{amount}</td>
            <td><BookingStatusBadge status=booking.status/></td>
            <td>{booking.created_at.unwrap_or_default()}</td>
        </tr>
    }
}

#[component]
fn QuoteOverview() -> impl IntoView {
    let auth = use_auth();
    let page = RwSignal::new(0_u32);
    let quotes = LocalResource::new(move || {
        let api = auth.api();
        let page = page.get();
        async move { api.fetch_all_quotes(page, LISTING_PAGE_SIZE).await }
    });

    let row = |quote: Quote| {
        view! {
            <tr>
                <td>{quote.worker_label().to_owned()}</td>
                <td>{format_price(quote.price)}</td>
                <td>{quote.duration_label().unwrap_or_default()}</td>
                <td>{quote.note().unwrap_or_default().to_owned()}</td>
            </tr>
        }
    };

    view! {
        <section class="user-admin">
            <h2>"Quotes"</h2>
            <Suspense fallback=move || view! { <p class="list-page__loading">"Loading quotes..."</p> }>
                {move || {
                    quotes
                        .get()
                        .map(move |result| match result {
                            Ok(items) => {
                                let has_next = has_next_page(items.len(), LISTING_PAGE_SIZE);
                                view! {
                                    <table class="user-admin__table">
                                        <thead>
                                            <tr>
                                                <th>"Worker"</th>
                                                <th>"Price"</th>
                                                <th>"Duration"</th>
                                                <th>"Description"</th>
                                            </tr>
                                        </thead>
                                        <tbody>{items.into_iter().map(row).collect_view()}</tbody>
                                    </table>
                                    <Pager page=page has_next=has_next/>
                                }
                                    .into_any()
                            }
                            Err(e) => view! { <p class="page-error">{e.to_string()}</p> }.into_any(),
                        })
                }}
            </Suspense>
        </section>
    }
}
