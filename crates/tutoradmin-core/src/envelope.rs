//! The response envelope shared by every backend endpoint.

use crate::error::{AdminError, FieldErrors, Result};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Wire wrapper `{ success, data, message?, errors? }`.
///
/// `data` is only meaningful when `success` is true; use [`Envelope::into_data`]
/// rather than reading it directly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub success: bool,
    pub data: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "lenient_field_errors"
    )]
    pub errors: Option<FieldErrors>,
}

impl<T> Envelope<T> {
    /// Wraps a payload in a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
            message: None,
            errors: None,
        }
    }

    /// Returns the payload, or `Rejected` if the server flagged the call as unsuccessful.
    pub fn into_data(self) -> Result<T> {
        if self.success {
            Ok(self.data)
        } else {
            Err(AdminError::Rejected {
                message: self.message,
                errors: self.errors.unwrap_or_default(),
            })
        }
    }
}

/// Envelope header without the payload.
///
/// Used for endpoints that return nothing useful, and to pull `message`/`errors`
/// out of failed responses whose `data` may be absent or of any shape.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnvelopeStatus {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default, deserialize_with = "lenient_field_errors")]
    pub errors: Option<FieldErrors>,
    /// Present in the `ApiError` shape `{ message, statusCode, errors? }`.
    #[serde(default)]
    pub status_code: Option<u16>,
}

impl EnvelopeStatus {
    /// Parses the header from a body, returning `None` for non-JSON bodies.
    pub fn parse(body: &[u8]) -> Option<Self> {
        serde_json::from_slice(body).ok()
    }

    /// True when the server explicitly reported `success: false`.
    pub fn is_rejected(&self) -> bool {
        self.success == Some(false)
    }

    /// Converts a failed status header into an error for the given HTTP status.
    pub fn into_transport_error(self, status: u16) -> AdminError {
        AdminError::Transport {
            status,
            message: self.message,
            errors: self.errors.unwrap_or_default(),
        }
    }

    /// Converts a `success: false` header on a 2xx response into `Rejected`.
    pub fn into_rejected_error(self) -> AdminError {
        AdminError::Rejected {
            message: self.message,
            errors: self.errors.unwrap_or_default(),
        }
    }
}

/// Reads `errors` as a field map whose values are string lists or single
/// strings. Entries of any other shape are dropped, and a non-object
/// `errors` reads as absent, so a stray shape never hides `message`.
fn lenient_field_errors<'de, D>(
    deserializer: D,
) -> std::result::Result<Option<FieldErrors>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(Value::Object(map)) = Option::<Value>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let errors: FieldErrors = map
        .into_iter()
        .filter_map(|(field, value)| {
            let messages = match value {
                Value::String(message) => vec![message],
                Value::Array(items) => items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(message) => Some(message),
                        _ => None,
                    })
                    .collect(),
                _ => return None,
            };
            Some((field, messages))
        })
        .collect();
    Ok(Some(errors))
}
