//! Typed wrappers over the backend's resource endpoints.
//!
//! Each API borrows an [`ApiClient`](crate::client::ApiClient) and maps one
//! method to one request. Errors from the client pass through unchanged.

mod analytics;
mod auth;
mod mail;
mod payments;
mod students;
mod tutors;

pub use analytics::{
    AnalyticsApi, DEFAULT_ACTIVITY_LIMIT, DEFAULT_GROWTH_MONTHS, DEFAULT_TOP_MODULES,
};
pub use auth::{AuthApi, TokenStatus};
pub use mail::MailApi;
pub use payments::PaymentsApi;
pub use students::StudentsApi;
pub use tutors::TutorsApi;

use serde::Serialize;

/// Body for ban/reject calls that carry an optional free-text reason.
#[derive(Debug, Serialize)]
pub(crate) struct ReasonBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<&'a str>,
}
