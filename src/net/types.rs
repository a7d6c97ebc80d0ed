//! JSON DTOs for the client/backend boundary.
//!
//! DESIGN
//! ======
//! Field names follow the backend's camelCase JSON. Identifiers are kept as
//! strings on the client and accept either JSON numbers or strings, so route
//! paths can be formatted without caring how the backend keys its rows.
//! Unknown fields are ignored so backend additions never break decoding.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Account role. Drives navigation and route access.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Customer,
    Worker,
    Admin,
}

impl Role {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Customer => "customer",
            Self::Worker => "worker",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The signed-in user record, as returned by login and persisted under the
/// `user` storage key.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    /// ISO 8601 creation timestamp.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
}

fn default_active() -> bool {
    true
}

/// Credentials posted to `/auth/login`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication: the bearer token and the user it belongs to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: User,
}

/// Lifecycle of a service request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RequestStatus {
    Open,
    Booked,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl RequestStatus {
    /// Statuses an admin can move a request to.
    pub const SETTABLE: [Self; 4] = [Self::Open, Self::Booked, Self::Completed, Self::Cancelled];

    /// Inverse of [`RequestStatus::as_str`] over the settable statuses.
    #[must_use]
    pub fn from_form(value: &str) -> Option<Self> {
        Self::SETTABLE.into_iter().find(|s| s.as_str() == value)
    }

    /// Wire name, as used in query strings and status updates.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Booked => "BOOKED",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Booked => "Booked",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

/// How soon the customer needs the work done.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Urgency {
    Low,
    Medium,
    High,
    Urgent,
    Critical,
    #[serde(other)]
    Unknown,
}

impl Urgency {
    /// Levels offered when posting a request.
    pub const CHOICES: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "LOW",
            Self::Medium => "MEDIUM",
            Self::High => "HIGH",
            Self::Urgent => "URGENT",
            Self::Critical => "CRITICAL",
            Self::Unknown => "UNKNOWN",
        }
    }

    /// Inverse of [`Urgency::as_str`] for form values.
    #[must_use]
    pub fn from_form(value: &str) -> Option<Self> {
        Self::CHOICES.into_iter().find(|u| u.as_str() == value)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::Urgent => "Urgent",
            Self::Critical => "Critical",
            Self::Unknown => "Unknown",
        }
    }
}

/// Lifecycle of a booking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl BookingStatus {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Confirmed => "CONFIRMED",
            Self::InProgress => "IN_PROGRESS",
            Self::Completed => "COMPLETED",
            Self::Cancelled => "CANCELLED",
            Self::Unknown => "UNKNOWN",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::InProgress => "In Progress",
            Self::Completed => "Completed",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }
}

/// A worker's price offer on a service request.
///
/// Quote listings come in two shapes: a nested `worker` with `message` and
/// `estimatedDays`, or a flat `workerName` with `description` and a free-text
/// `estimatedDuration`. Both are accepted.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub price: f64,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub estimated_days: Option<u32>,
    #[serde(default, deserialize_with = "deserialize_opt_text")]
    pub estimated_duration: Option<String>,
    #[serde(default)]
    pub worker: Option<UserSummary>,
    #[serde(default)]
    pub worker_name: Option<String>,
}

impl Quote {
    /// Name of the quoting worker, falling back to `"Worker"`.
    #[must_use]
    pub fn worker_label(&self) -> &str {
        self.worker
            .as_ref()
            .map(|w| w.name.as_str())
            .or(self.worker_name.as_deref())
            .unwrap_or("Worker")
    }

    #[must_use]
    pub fn note(&self) -> Option<&str> {
        self.message.as_deref().or(self.description.as_deref())
    }

    #[must_use]
    pub fn duration_label(&self) -> Option<String> {
        self.estimated_duration
            .clone()
            .or_else(|| self.estimated_days.map(|d| format!("{d} day(s)")))
    }
}

/// Name and contact of another party on a request or booking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
}

/// A customer's request for work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceRequest {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub category: Option<String>,
    pub status: RequestStatus,
    #[serde(default)]
    pub urgency: Option<Urgency>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub quotes: Vec<Quote>,
    #[serde(default)]
    pub customer: Option<UserSummary>,
    #[serde(default)]
    pub photo_url: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// An accepted quote turned into scheduled work.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    pub status: BookingStatus,
    #[serde(default)]
    pub service_request: Option<ServiceRequest>,
    #[serde(default)]
    pub customer: Option<UserSummary>,
    #[serde(default)]
    pub worker: Option<UserSummary>,
    #[serde(default)]
    pub quote: Option<Quote>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub rating: Option<u8>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub payment_amount: Option<f64>,
}

impl Booking {
    /// What the booking is worth: the paid amount once completed, else the
    /// accepted quote's price.
    #[must_use]
    pub fn amount(&self) -> Option<f64> {
        self.payment_amount.or_else(|| self.quote.as_ref().map(|q| q.price))
    }
}

// =============================================================================
// WRITE BODIES
// =============================================================================

/// Body of `POST /customer/requests`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewServiceRequest {
    pub title: String,
    pub description: String,
    pub category: String,
    pub urgency: Urgency,
    pub location: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
}

/// Body of `POST /customer/bookings`: accept `quote_id` on `request_id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBooking {
    #[serde(serialize_with = "serialize_id")]
    pub request_id: String,
    #[serde(serialize_with = "serialize_id")]
    pub quote_id: String,
}

/// Body of `POST /customer/bookings/{id}/complete`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingCompletion {
    pub payment_amount: f64,
    pub feedback: String,
    pub rating: u8,
}

/// Body of `POST /worker/quotes`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewQuote {
    #[serde(serialize_with = "serialize_id")]
    pub request_id: String,
    pub price: f64,
    pub description: String,
    pub estimated_duration: String,
}

/// Platform-wide counters for the admin dashboard.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlatformStats {
    pub total_users: u64,
    pub customers: u64,
    pub workers: u64,
    pub admins: u64,
    pub total_requests: u64,
    pub open_requests: u64,
    pub booked_requests: u64,
    pub total_bookings: u64,
    pub completed_bookings: u64,
    pub total_revenue: f64,
}

/// An admin listing, which the backend returns either paged or as a bare
/// array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Listing<T> {
    Paged(Page<T>),
    Plain(Vec<T>),
}

impl<T> Listing<T> {
    #[must_use]
    pub fn into_items(self) -> Vec<T> {
        match self {
            Self::Paged(page) => page.content,
            Self::Plain(items) => items,
        }
    }
}

/// One page of a paginated admin listing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_pages: u32,
    #[serde(default)]
    pub total_elements: u64,
    #[serde(default)]
    pub number: u32,
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(s) => Ok(s),
        serde_json::Value::Number(n) if n.is_i64() || n.is_u64() => Ok(n.to_string()),
        other => Err(D::Error::custom(format!("expected string or integer id, got {other}"))),
    }
}

fn deserialize_opt_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<serde_json::Value>::deserialize(deserializer)? {
        None | Some(serde_json::Value::Null) => Ok(None),
        Some(serde_json::Value::String(s)) => Ok(Some(s)),
        Some(serde_json::Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(D::Error::custom(format!("expected text, got {other}"))),
    }
}

/// Ids go back out as JSON numbers when they are numeric, matching how the
/// backend keys its rows.
#[allow(clippy::ptr_arg)]
fn serialize_id<S>(id: &String, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match id.parse::<i64>() {
        Ok(n) => serializer.serialize_i64(n),
        Err(_) => serializer.serialize_str(id),
    }
}
