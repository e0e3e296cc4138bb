use crate::models::Admin;
use serde::{Deserialize, Serialize};

/// Snapshot of "who is logged in".
///
/// `is_authenticated` is derived from the other two fields rather than stored,
/// so it is true exactly when both a user and a token are present.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub user: Option<Admin>,
    pub token: Option<String>,
}

impl Session {
    pub fn authenticated(user: Admin, token: impl Into<String>) -> Self {
        Self {
            user: Some(user),
            token: Some(token.into()),
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some() && self.token.is_some()
    }
}
