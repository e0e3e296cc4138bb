//! Client-side session state.
//!
//! # Module Structure
//!
//! - `model`: The `Session` snapshot
//! - `store`: `SessionStore`, the single owner of session state

mod model;
mod store;

pub use model::Session;
pub use store::{ADMIN_USER_KEY, AUTH_TOKEN_KEY, SessionStore};
