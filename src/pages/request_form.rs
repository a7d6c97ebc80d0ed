//! Posting a new service request.

#[cfg(test)]
#[path = "request_form_test.rs"]
mod request_form_test;

use leptos::prelude::*;
#[cfg(feature = "hydrate")]
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::net::types::{NewServiceRequest, Urgency};
use crate::routes::CUSTOMER_REQUESTS;
use crate::state::auth::use_auth;

pub const CATEGORIES: [&str; 8] =
    ["Plumbing", "Electrical", "Cleaning", "Carpentry", "Painting", "Gardening", "Moving", "Other"];

fn validate_new_request(
    title: &str,
    description: &str,
    category: &str,
    urgency: &str,
    location: &str,
) -> Result<NewServiceRequest, &'static str> {
    let (title, description, location) = (title.trim(), description.trim(), location.trim());
    if title.is_empty() {
        return Err("Enter a title.");
    }
    if !CATEGORIES.contains(&category) {
        return Err("Choose a category.");
    }
    if description.is_empty() {
        return Err("Describe the work you need done.");
    }
    let Some(urgency) = Urgency::from_form(urgency) else {
        return Err("Choose how urgent the work is.");
    };
    if location.is_empty() {
        return Err("Enter the job location.");
    }
    Ok(NewServiceRequest {
        title: title.to_owned(),
        description: description.to_owned(),
        category: category.to_owned(),
        urgency,
        location: location.to_owned(),
        photo_url: None,
    })
}

#[component]
pub fn CreateServiceRequestPage() -> impl IntoView {
    let auth = use_auth();
    let navigate = use_navigate();

    let title = RwSignal::new(String::new());
    let description = RwSignal::new(String::new());
    let category = RwSignal::new(String::new());
    let urgency = RwSignal::new(Urgency::Medium.as_str().to_owned());
    let location = RwSignal::new(String::new());
    let error = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        let request = match validate_new_request(
            &title.get(),
            &description.get(),
            &category.get(),
            &urgency.get(),
            &location.get(),
        ) {
            Ok(request) => request,
            Err(msg) => {
                error.set(msg.to_owned());
                return;
            }
        };
        busy.set(true);
        error.set(String::new());

        #[cfg(feature = "hydrate")]
        {
            let navigate = navigate.clone();
            leptos::task::spawn_local(async move {
                match auth.api().create_service_request(&request).await {
                    Ok(_) => navigate(CUSTOMER_REQUESTS, NavigateOptions::default()),
                    Err(e) => error.set(e.message_or("Failed to create request")),
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (request, &navigate, &auth);
            busy.set(false);
        }
    };

    view! {
        <div class="form-page">
            <h1>"New Service Request"</h1>
            <form class="form" on:submit=on_submit>
                <input
                    class="form__input"
                    placeholder="Title, e.g. Fix leaking kitchen sink"
                    prop:value=move || title.get()
                    on:input=move |ev| title.set(event_target_value(&ev))
                />
                <select class="form__input" prop:value=move || category.get() on:change=move |ev| category.set(event_target_value(&ev))>
                    <option value="">"Select category"</option>
                    {CATEGORIES.into_iter().map(|c| view! { <option value=c>{c}</option> }).collect_view()}
                </select>
                <textarea
                    class="form__input"
                    rows="4"
                    placeholder="Describe the work"
                    prop:value=move || description.get()
                    on:input=move |ev| description.set(event_target_value(&ev))
                ></textarea>
                <select class="form__input" prop:value=move || urgency.get() on:change=move |ev| urgency.set(event_target_value(&ev))>
                    {Urgency::CHOICES
                        .into_iter()
                        .map(|u| view! { <option value=u.as_str()>{u.label()}</option> })
                        .collect_view()}
                </select>
                <input
                    class="form__input"
                    placeholder="Location"
                    prop:value=move || location.get()
                    on:input=move |ev| location.set(event_target_value(&ev))
                />
                <div class="form__actions">
                    <button class="btn btn--primary" type="submit" disabled=move || busy.get()>
                        {move || if busy.get() { "Posting..." } else { "Post Request" }}
                    </button>
                    <a class="btn" href=CUSTOMER_REQUESTS>"Cancel"</a>
                </div>
            </form>
            <Show when=move || !error.get().is_empty()>
                <p class="page-error">{move || error.get()}</p>
            </Show>
        </div>
    }
}
