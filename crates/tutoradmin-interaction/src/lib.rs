//! HTTP layer for the tutoradmin client.
//!
//! [`ApiClient`] owns the base URL, bearer-token injection and envelope
//! unwrapping; the [`api`] modules map resource operations onto it. The wire
//! itself sits behind [`HttpTransport`] so tests can script responses.

pub mod api;
pub mod client;
pub mod query;
pub mod transport;

pub use api::{AnalyticsApi, AuthApi, MailApi, PaymentsApi, StudentsApi, TokenStatus, TutorsApi};
pub use client::{ApiClient, RequestOptions, ResponseType};
pub use transport::{HttpRequest, HttpTransport, RawResponse, ReqwestTransport};
