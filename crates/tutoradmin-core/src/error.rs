//! Error types for the tutoradmin client.

use std::collections::BTreeMap;
use thiserror::Error;

/// Field name to validation messages, as returned in the `errors` member of
/// a backend response.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// A shared error type for the whole client.
///
/// `Network` and `Transport` are kept apart so callers can tell "could not
/// reach the server" from "the server said no".
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AdminError {
    /// The request never produced a response (connect failure, timeout,
    /// interrupted body).
    #[error("Network error: {message}")]
    Network { message: String },

    /// A response arrived with a non-success HTTP status.
    #[error("Request failed with status {status}{}", display_message(.message))]
    Transport {
        status: u16,
        message: Option<String>,
        errors: FieldErrors,
    },

    /// A 2xx response whose envelope reported `success: false`.
    #[error("Request rejected by server{}", display_message(.message))]
    Rejected {
        message: Option<String>,
        errors: FieldErrors,
    },

    /// A 2xx response whose body did not have the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The request was abandoned because its cancellation token fired.
    #[error("Request cancelled")]
    Cancelled,

    /// Local persistence failure.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization { format: String, message: String },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

fn display_message(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(": {}", m),
        None => String::new(),
    }
}

impl AdminError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates a Network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Creates a Transport error without a structured body
    pub fn transport(status: u16) -> Self {
        Self::Transport {
            status,
            message: None,
            errors: FieldErrors::new(),
        }
    }

    /// Creates a Decode error
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Creates a Storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Check if this is a Network error
    pub fn is_network(&self) -> bool {
        matches!(self, Self::Network { .. })
    }

    /// Check if this is a Transport error
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport { .. })
    }

    /// Check if this is a Cancelled error
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// HTTP status of a Transport error.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Transport { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// True for 401 responses, which mean the stored token is no longer accepted.
    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Structured field errors carried by Transport and Rejected errors.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            Self::Transport { errors, .. } | Self::Rejected { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// Server-provided message, if any.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::Transport { message, .. } | Self::Rejected { message, .. } => {
                message.as_deref()
            }
            _ => None,
        }
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for AdminError {
    fn from(err: std::io::Error) -> Self {
        Self::Storage(format!("{} (kind: {:?})", err, err.kind()))
    }
}

impl From<serde_json::Error> for AdminError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for AdminError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, AdminError>`.
pub type Result<T> = std::result::Result<T, AdminError>;
