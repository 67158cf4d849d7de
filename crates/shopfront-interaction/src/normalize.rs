//! Response-side middleware: turns whatever the transport produced into
//! either the unwrapped payload or a [`BusinessError`].
//!
//! This is the only place that decides when a failure tears down the session.

use crate::transport::{RawResponse, TransportError};
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use shopfront_core::{BusinessError, Envelope, ErrorCode, SessionContext};

/// Message substituted for every 503, whatever the body said.
pub const DEPENDENCY_UNAVAILABLE_MESSAGE: &str =
    "A backend dependency is unavailable. Check that the upstream services are running.";

/// Applies envelope unwrapping and error classification for one client.
#[derive(Debug, Clone)]
pub struct ResponseNormalizer {
    session: SessionContext,
}

impl ResponseNormalizer {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }

    /// Normalizes a transport outcome.
    pub fn normalize<T: DeserializeOwned>(
        &self,
        outcome: Result<RawResponse, TransportError>,
    ) -> Result<T, BusinessError> {
        match outcome {
            Ok(response) if response.status.is_success() => self.on_success(response),
            Ok(response) => Err(self.on_http_failure(response)),
            Err(TransportError::NoResponse(reason)) => {
                // No response means no auth signal; the session stays as it is.
                tracing::warn!("[ApiClient] Network failure: {}", reason);
                Err(BusinessError::network())
            }
            Err(TransportError::Other(reason)) => {
                tracing::warn!("[ApiClient] Request failed: {}", reason);
                Err(BusinessError::internal(reason))
            }
        }
    }

    fn on_success<T: DeserializeOwned>(&self, response: RawResponse) -> Result<T, BusinessError> {
        let envelope = Envelope::decode(&response.body).map_err(|e| {
            tracing::warn!(
                "[ApiClient] {} response is not a valid envelope: {}",
                response.status,
                e
            );
            BusinessError::malformed(format!("Response is not a valid envelope: {}", e))
        })?;

        envelope.into_data().map_err(|err| {
            if err.is_auth_error() {
                self.teardown(&err.code);
            } else {
                tracing::debug!("[ApiClient] Business error {}: {}", err.code, err.message);
            }
            err
        })
    }

    fn on_http_failure(&self, response: RawResponse) -> BusinessError {
        let status = response.status;
        let envelope = if response.body.is_empty() {
            None
        } else {
            Envelope::decode(&response.body)
                .ok()
                .filter(|envelope| !envelope.code.is_ok())
        };

        let mut error = match envelope {
            Some(envelope) => BusinessError::new(envelope.code, envelope.message),
            None => BusinessError::new(
                code_for_status(status),
                format!("Request failed with status {}", status),
            ),
        };

        tracing::warn!("[ApiClient] HTTP {}: {} ({})", status, error.message, error.code);
        if status == StatusCode::SERVICE_UNAVAILABLE {
            error = BusinessError::new(ErrorCode::ServiceUnavailable, DEPENDENCY_UNAVAILABLE_MESSAGE);
        }

        if status == StatusCode::UNAUTHORIZED || error.is_auth_error() {
            self.teardown(&error.code);
        }

        error
    }

    fn teardown(&self, code: &ErrorCode) {
        if self.session.clear() {
            tracing::warn!("[ApiClient] Session cleared after {}", code);
        }
    }
}

/// Sentinel code for a failed HTTP status with no usable envelope.
pub fn code_for_status(status: StatusCode) -> ErrorCode {
    match status {
        StatusCode::SERVICE_UNAVAILABLE => ErrorCode::ServiceUnavailable,
        StatusCode::UNAUTHORIZED => ErrorCode::Unauthorized,
        _ => ErrorCode::InternalError,
    }
}
