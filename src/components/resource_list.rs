//! Loading / error / empty / list rendering for fetched collections.

use leptos::prelude::*;

use crate::net::api::ApiError;

/// Renders `resource` as a list, with a loading line while the fetch is in
/// flight, the error text on failure, and `empty` when nothing came back.
#[component]
pub fn ResourceList<T, F, V>(
    resource: LocalResource<Result<Vec<T>, ApiError>>,
    empty: &'static str,
    render: F,
) -> impl IntoView
where
    T: Clone + 'static,
    F: Fn(T) -> V + Copy + Send + Sync + 'static,
    V: IntoView + 'static,
{
    view! {
        <Suspense fallback=move || view! { <p class="list-page__loading">"Loading..."</p> }>
            {move || {
                resource
                    .get()
                    .map(|result| match result {
                        Ok(items) if items.is_empty() => {
                            view! { <p class="list-page__empty">{empty}</p> }.into_any()
                        }
                        Ok(items) => {
                            view! { <div class="list-page__items">{items.into_iter().map(render).collect_view()}</div> }
                                .into_any()
                        }
                        Err(e) => view! { <p class="page-error">{e.to_string()}</p> }.into_any(),
                    })
            }}
        </Suspense>
    }
}
