use leptos::prelude::*;

use crate::routes;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="not-found-page">
            <h1>"404"</h1>
            <p>"Page not found."</p>
            <a href=routes::HOME>"Back to home"</a>
        </div>
    }
}
