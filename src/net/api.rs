//! REST client for the marketplace backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`, each carrying
//! `Authorization: Bearer <token>` from the session store.
//! Server-side (SSR): every call fails with `ApiError::Unavailable` since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result` outputs instead of panics so fetch failures degrade
//! to an inline error message. Backend error bodies of the form
//! `{"message": "..."}` become the error text, including on 401, which maps
//! to `ApiError::Unauthenticated`. No call is retried.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use serde::Serialize;
use serde::de::DeserializeOwned;

use super::types::{
    Booking, BookingCompletion, BookingStatus, Listing, LoginRequest, LoginResponse, NewBooking, NewQuote,
    NewServiceRequest, Page, PlatformStats, Quote, RequestStatus, ServiceRequest, User,
};
use crate::config::ClientConfig;
use crate::session::SessionStore;

const SESSION_EXPIRED: &str = "your session has expired, please sign in again";

/// Failure of a backend call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// 401. `message` is the backend's own explanation when it sent one.
    #[error("{}", .message.as_deref().unwrap_or(SESSION_EXPIRED))]
    Unauthenticated { message: Option<String> },
    /// Any other non-2xx status.
    #[error("{}", status_text(.status, .message.as_deref()))]
    Status { status: u16, message: Option<String> },
    #[error("request failed: {0}")]
    Network(String),
    #[error("could not encode request: {0}")]
    Encode(String),
    #[error("unexpected response: {0}")]
    Decode(String),
    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// The explanation the backend sent with an error status, if any.
    #[must_use]
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Self::Unauthenticated { message } | Self::Status { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Text for a failed form: the backend's message, else `fallback`.
    #[must_use]
    pub fn message_or(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_owned()
    }
}

fn status_text(status: &u16, message: Option<&str>) -> String {
    message.map_or_else(|| format!("request failed: {status}"), str::to_owned)
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Method {
    Get,
    Post,
    Put,
    Delete,
}

// =============================================================================
// PATHS
// =============================================================================

const LOGIN_PATH: &str = "/auth/login";
const PROFILE_PATH: &str = "/auth/profile";
const CUSTOMER_REQUESTS_PATH: &str = "/customer/requests";
const CUSTOMER_BOOKINGS_PATH: &str = "/customer/bookings";
const WORKER_REQUESTS_PATH: &str = "/worker/requests";
const WORKER_BOOKINGS_PATH: &str = "/worker/bookings";
const WORKER_QUOTES_PATH: &str = "/worker/quotes";
const ADMIN_STATS_PATH: &str = "/admin/stats";

fn request_details_path(request_id: &str) -> String {
    format!("/customer/request/{request_id}")
}

fn quotes_for_request_path(request_id: &str) -> String {
    format!("/quotes/request/{request_id}")
}

fn users_page_path(page: u32, size: u32) -> String {
    format!("/admin/users?page={page}&size={size}")
}

fn user_status_path(user_id: &str) -> String {
    format!("/admin/users/{user_id}/status")
}

fn user_path(user_id: &str) -> String {
    format!("/admin/users/{user_id}")
}

fn complete_booking_path(booking_id: &str) -> String {
    format!("{CUSTOMER_BOOKINGS_PATH}/{booking_id}/complete")
}

/// `status` filters the listing; `None` sends an empty filter.
fn admin_requests_path(page: u32, size: u32, status: Option<RequestStatus>) -> String {
    let status = status.map_or("", RequestStatus::as_str);
    format!("/admin/requests?page={page}&size={size}&status={status}")
}

fn admin_bookings_path(page: u32, size: u32, status: Option<BookingStatus>) -> String {
    let status = status.map_or("", BookingStatus::as_str);
    format!("/admin/bookings?page={page}&size={size}&status={status}")
}

fn admin_quotes_path(page: u32, size: u32) -> String {
    format!("/admin/quotes?page={page}&size={size}")
}

fn admin_request_path(request_id: &str) -> String {
    format!("/admin/requests/{request_id}")
}

fn admin_request_status_path(request_id: &str) -> String {
    format!("/admin/requests/{request_id}/status")
}

#[derive(Serialize)]
struct RequestStatusBody {
    status: RequestStatus,
}

fn status_body(status: RequestStatus) -> RequestStatusBody {
    RequestStatusBody { status }
}

// =============================================================================
// RESPONSE HANDLING
// =============================================================================

#[derive(serde::Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

fn backend_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Map a non-2xx response to an [`ApiError`], keeping the backend's
/// `message` whenever it sent one.
fn error_for_status(status: u16, body: &str) -> ApiError {
    let message = backend_message(body);
    if status == 401 {
        return ApiError::Unauthenticated { message };
    }
    ApiError::Status { status, message }
}

/// Decode a 2xx body. An empty body decodes as JSON `null`, which is what
/// `()` expects for endpoints that return nothing.
fn decode_body<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let body = if body.trim().is_empty() { "null" } else { body };
    serde_json::from_str(body).map_err(|e| ApiError::Decode(e.to_string()))
}

// =============================================================================
// CLIENT
// =============================================================================

/// Bearer-authenticated client for the backend REST API.
#[derive(Clone, Debug)]
pub struct ApiClient {
    config: ClientConfig,
    session: SessionStore,
}

impl ApiClient {
    #[must_use]
    pub fn new(config: ClientConfig, session: SessionStore) -> Self {
        Self { config, session }
    }

    /// Exchange credentials for a token and user record.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the credentials are rejected.
    pub async fn login(&self, credentials: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.request(Method::Post, LOGIN_PATH, Some(credentials)).await
    }

    /// Fetch the signed-in user's profile.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_profile(&self) -> Result<User, ApiError> {
        self.get(PROFILE_PATH).await
    }

    // --- customer -----------------------------------------------------------

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_my_requests(&self) -> Result<Vec<ServiceRequest>, ApiError> {
        self.get(CUSTOMER_REQUESTS_PATH).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_my_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get(CUSTOMER_BOOKINGS_PATH).await
    }

    /// Post a new service request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn create_service_request(&self, request: &NewServiceRequest) -> Result<ServiceRequest, ApiError> {
        self.request(Method::Post, CUSTOMER_REQUESTS_PATH, Some(request)).await
    }

    /// Accept a quote, turning the request into a booking.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn create_booking(&self, booking: &NewBooking) -> Result<Booking, ApiError> {
        self.request(Method::Post, CUSTOMER_BOOKINGS_PATH, Some(booking)).await
    }

    /// Mark a booking done, recording payment, rating, and feedback.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn complete_booking(&self, booking_id: &str, completion: &BookingCompletion) -> Result<Booking, ApiError> {
        self.request(Method::Post, &complete_booking_path(booking_id), Some(completion)).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_request_details(&self, request_id: &str) -> Result<ServiceRequest, ApiError> {
        self.get(&request_details_path(request_id)).await
    }

    // --- worker -------------------------------------------------------------

    /// Open requests a worker can quote on.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_available_requests(&self) -> Result<Vec<ServiceRequest>, ApiError> {
        self.get(WORKER_REQUESTS_PATH).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_worker_bookings(&self) -> Result<Vec<Booking>, ApiError> {
        self.get(WORKER_BOOKINGS_PATH).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_quotes_for_request(&self, request_id: &str) -> Result<Vec<Quote>, ApiError> {
        self.get(&quotes_for_request_path(request_id)).await
    }

    /// Offer a price on an open request.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails or the backend rejects it.
    pub async fn submit_quote(&self, quote: &NewQuote) -> Result<Quote, ApiError> {
        self.request(Method::Post, WORKER_QUOTES_PATH, Some(quote)).await
    }

    // --- admin --------------------------------------------------------------

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_platform_stats(&self) -> Result<PlatformStats, ApiError> {
        self.get(ADMIN_STATS_PATH).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_users(&self, page: u32, size: u32) -> Result<Page<User>, ApiError> {
        self.get(&users_page_path(page, size)).await
    }

    /// Activate or deactivate an account.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_user_status(&self, user_id: &str, active: bool) -> Result<(), ApiError> {
        #[derive(Serialize)]
        struct StatusBody {
            active: bool,
        }
        self.request(Method::Put, &user_status_path(user_id), Some(&StatusBody { active }))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_user(&self, user_id: &str) -> Result<(), ApiError> {
        self.request::<(), ()>(Method::Delete, &user_path(user_id), None).await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_all_requests(
        &self,
        page: u32,
        size: u32,
        status: Option<RequestStatus>,
    ) -> Result<Vec<ServiceRequest>, ApiError> {
        self.get::<Listing<_>>(&admin_requests_path(page, size, status)).await.map(Listing::into_items)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_all_bookings(
        &self,
        page: u32,
        size: u32,
        status: Option<BookingStatus>,
    ) -> Result<Vec<Booking>, ApiError> {
        self.get::<Listing<_>>(&admin_bookings_path(page, size, status)).await.map(Listing::into_items)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn fetch_all_quotes(&self, page: u32, size: u32) -> Result<Vec<Quote>, ApiError> {
        self.get::<Listing<_>>(&admin_quotes_path(page, size)).await.map(Listing::into_items)
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn update_request_status(&self, request_id: &str, status: RequestStatus) -> Result<(), ApiError> {
        self.request(Method::Put, &admin_request_status_path(request_id), Some(&status_body(status)))
            .await
    }

    /// # Errors
    ///
    /// Returns [`ApiError`] if the request fails.
    pub async fn delete_request(&self, request_id: &str) -> Result<(), ApiError> {
        self.request::<(), ()>(Method::Delete, &admin_request_path(request_id), None).await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        self.request::<(), T>(Method::Get, path, None).await
    }

    async fn request<B, T>(&self, method: Method, path: &str, body: Option<&B>) -> Result<T, ApiError>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        let url = self.config.endpoint(path);
        let body = body
            .map(serde_json::to_value)
            .transpose()
            .map_err(|e| ApiError::Encode(e.to_string()))?;

        #[cfg(feature = "hydrate")]
        {
            use gloo_net::http::Request;

            let mut builder = match method {
                Method::Get => Request::get(&url),
                Method::Post => Request::post(&url),
                Method::Put => Request::put(&url),
                Method::Delete => Request::delete(&url),
            };
            if let Some(auth) = self.session.auth_header() {
                builder = builder.header("Authorization", &auth);
            }
            let request = match body {
                Some(body) => builder.json(&body),
                None => builder.header("Content-Type", "application/json").build(),
            }
            .map_err(|e| ApiError::Network(e.to_string()))?;

            let resp = request.send().await.map_err(|e| ApiError::Network(e.to_string()))?;
            let status = resp.status();
            let text = resp.text().await.unwrap_or_default();
            if !resp.ok() {
                leptos::logging::warn!("[api] {method:?} {path} -> {status}");
                return Err(error_for_status(status, &text));
            }
            decode_body(&text)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (method, url, body, &self.session);
            Err(ApiError::Unavailable)
        }
    }
}
