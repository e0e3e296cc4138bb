//! Domain types and session state for the tutoradmin client.
//!
//! This crate has no I/O of its own: persistence goes through
//! [`storage::KeyValueStore`] and networking lives in `tutoradmin-interaction`.

pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod session;
pub mod storage;

// Re-export common types
pub use envelope::Envelope;
pub use error::{AdminError, FieldErrors, Result};
pub use session::{Session, SessionStore};
