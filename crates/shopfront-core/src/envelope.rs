//! The `{ code, message, data }` wrapper carried by every API response.

use crate::error::{BusinessError, ErrorCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Server response envelope.
///
/// `data` is `Some` on a well-behaved `OK` response, but the wire format does
/// not enforce it, so it stays optional here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T = Value> {
    pub code: ErrorCode,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub data: Option<T>,
}

impl Envelope<Value> {
    /// Decodes raw bytes into an envelope with an untyped payload.
    ///
    /// Fails when the body is not JSON or lacks a string `code`.
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::from_slice(body)
    }

    /// Unwraps an `OK` envelope into its typed payload.
    ///
    /// A non-`OK` envelope becomes a [`BusinessError`] with the envelope's own
    /// code and message. A payload that does not fit `T` is reported as
    /// [`ErrorCode::MalformedResponse`]. A `null` payload decodes only into
    /// types that accept `null`, such as `()` or `Option<_>`.
    pub fn into_data<T: DeserializeOwned>(self) -> Result<T, BusinessError> {
        if !self.code.is_ok() {
            return Err(BusinessError::new(self.code, self.message));
        }
        let data = self.data.unwrap_or(Value::Null);
        serde_json::from_value(data)
            .map_err(|e| BusinessError::malformed(format!("Failed to decode response data: {}", e)))
    }
}

impl<T> Envelope<T> {
    /// Builds a successful envelope.
    pub fn ok(data: T) -> Self {
        Self {
            code: ErrorCode::Ok,
            message: "success".to_string(),
            data: Some(data),
        }
    }

    /// Builds a failure envelope with no payload.
    pub fn failure(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            data: None,
        }
    }
}
