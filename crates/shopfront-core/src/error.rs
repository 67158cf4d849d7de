//! Error types for the Shopfront client.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

/// Outcome code carried by every API envelope.
///
/// The named variants are the sentinels the client itself reasons about.
/// Anything else the server sends (e.g. `INSUFFICIENT_STOCK`) is kept verbatim
/// in [`ErrorCode::Business`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    Ok,
    Unauthorized,
    TokenExpired,
    TokenInvalid,
    TokenMissing,
    SessionExpired,
    ServiceUnavailable,
    InternalError,
    /// A 2xx body that was not a valid envelope, or whose `data` did not
    /// decode into the requested type.
    MalformedResponse,
    /// Any code outside the sentinel set, passed through unchanged.
    Business(String),
}

impl ErrorCode {
    /// Parses a wire code. Unknown codes become [`ErrorCode::Business`].
    pub fn parse(code: &str) -> Self {
        match code {
            "OK" => Self::Ok,
            "UNAUTHORIZED" => Self::Unauthorized,
            "TOKEN_EXPIRED" => Self::TokenExpired,
            "TOKEN_INVALID" => Self::TokenInvalid,
            "TOKEN_MISSING" => Self::TokenMissing,
            "SESSION_EXPIRED" => Self::SessionExpired,
            "SERVICE_UNAVAILABLE" => Self::ServiceUnavailable,
            "INTERNAL_ERROR" => Self::InternalError,
            "MALFORMED_RESPONSE" => Self::MalformedResponse,
            other => Self::Business(other.to_string()),
        }
    }

    /// Returns the wire representation of this code.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Ok => "OK",
            Self::Unauthorized => "UNAUTHORIZED",
            Self::TokenExpired => "TOKEN_EXPIRED",
            Self::TokenInvalid => "TOKEN_INVALID",
            Self::TokenMissing => "TOKEN_MISSING",
            Self::SessionExpired => "SESSION_EXPIRED",
            Self::ServiceUnavailable => "SERVICE_UNAVAILABLE",
            Self::InternalError => "INTERNAL_ERROR",
            Self::MalformedResponse => "MALFORMED_RESPONSE",
            Self::Business(code) => code,
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, Self::Ok)
    }

    /// True for codes that mean the held credential is no longer valid.
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self,
            Self::Unauthorized
                | Self::TokenExpired
                | Self::TokenInvalid
                | Self::TokenMissing
                | Self::SessionExpired
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for ErrorCode {
    fn from(code: &str) -> Self {
        Self::parse(code)
    }
}

impl Serialize for ErrorCode {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let code = String::deserialize(deserializer)?;
        Ok(Self::parse(&code))
    }
}

/// The single failure shape surfaced by the API client.
///
/// Auth failures, business failures and transport failures all arrive as a
/// `BusinessError`; callers branch on [`BusinessError::code`] only.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct BusinessError {
    pub code: ErrorCode,
    pub message: String,
}

impl BusinessError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    pub fn new(code: impl Into<ErrorCode>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// The request never produced a response (connect failure, timeout).
    pub fn network() -> Self {
        Self::new(ErrorCode::ServiceUnavailable, "network error")
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MalformedResponse, message)
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// The session was (or should be) torn down; the user must log in again.
    pub fn is_auth_error(&self) -> bool {
        self.code.is_auth_error()
    }

    /// Infrastructure failure; the UI should offer "try again later".
    pub fn is_unavailable(&self) -> bool {
        matches!(self.code, ErrorCode::ServiceUnavailable)
    }

    /// Domain failure whose message is meant for the end user.
    pub fn is_business(&self) -> bool {
        matches!(self.code, ErrorCode::Business(_))
    }
}

/// A type alias for `Result<T, BusinessError>`.
pub type Result<T> = std::result::Result<T, BusinessError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_round_trips_sentinels() {
        for code in [
            "OK",
            "UNAUTHORIZED",
            "TOKEN_EXPIRED",
            "TOKEN_INVALID",
            "TOKEN_MISSING",
            "SESSION_EXPIRED",
            "SERVICE_UNAVAILABLE",
            "INTERNAL_ERROR",
        ] {
            let parsed = ErrorCode::parse(code);
            assert!(!matches!(parsed, ErrorCode::Business(_)), "{code}");
            assert_eq!(parsed.as_str(), code);
        }
    }

    #[test]
    fn test_unknown_code_passes_through() {
        let code = ErrorCode::parse("INSUFFICIENT_STOCK");
        assert_eq!(code, ErrorCode::Business("INSUFFICIENT_STOCK".to_string()));
        assert_eq!(code.to_string(), "INSUFFICIENT_STOCK");
        assert!(!code.is_auth_error());
    }

    #[test]
    fn test_auth_error_set() {
        let auth: Vec<ErrorCode> = vec![
            ErrorCode::Unauthorized,
            ErrorCode::TokenExpired,
            ErrorCode::TokenInvalid,
            ErrorCode::TokenMissing,
            ErrorCode::SessionExpired,
        ];
        for code in auth {
            assert!(code.is_auth_error(), "{code}");
        }
        assert!(!ErrorCode::Ok.is_auth_error());
        assert!(!ErrorCode::ServiceUnavailable.is_auth_error());
        assert!(!ErrorCode::InternalError.is_auth_error());
    }

    #[test]
    fn test_business_error_display_and_serde() {
        let err = BusinessError::new("COUPON_INVALID", "Coupon has expired");
        assert_eq!(err.to_string(), "COUPON_INVALID: Coupon has expired");
        assert!(err.is_business());

        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["code"], "COUPON_INVALID");
        let back: BusinessError = serde_json::from_value(json).unwrap();
        assert_eq!(back, err);
    }

    #[test]
    fn test_network_error_is_unavailable() {
        let err = BusinessError::network();
        assert!(err.is_unavailable());
        assert!(!err.is_auth_error());
        assert_eq!(err.message, "network error");
    }
}
