//! Request-side middleware applied to every outbound call.

use crate::transport::ApiRequest;
use reqwest::header::{AUTHORIZATION, HeaderName, HeaderValue};
use shopfront_core::SessionContext;
use uuid::Uuid;

/// Header carrying a per-request correlation id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Mutates a request before it reaches the transport.
///
/// Interceptors run in the order they were registered on the client.
pub trait RequestInterceptor: Send + Sync {
    fn intercept(&self, request: &mut ApiRequest);
}

/// Attaches `Authorization: Bearer <token>` when the session holds a usable token.
///
/// Without one the request is left as the caller built it.
#[derive(Debug, Clone)]
pub struct BearerAuth {
    session: SessionContext,
}

impl BearerAuth {
    pub fn new(session: SessionContext) -> Self {
        Self { session }
    }
}

impl RequestInterceptor for BearerAuth {
    fn intercept(&self, request: &mut ApiRequest) {
        let Some(token) = self.session.token() else {
            return;
        };

        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(mut value) => {
                value.set_sensitive(true);
                request.headers.insert(AUTHORIZATION, value);
            }
            Err(_) => {
                tracing::warn!("[BearerAuth] Token contains characters not allowed in a header; not attached");
            }
        }
    }
}

/// Tags each request with a fresh UUID unless the caller supplied one.
#[derive(Debug, Clone, Default)]
pub struct RequestId;

impl RequestInterceptor for RequestId {
    fn intercept(&self, request: &mut ApiRequest) {
        let name = HeaderName::from_static(REQUEST_ID_HEADER);
        if request.headers.contains_key(&name) {
            return;
        }
        if let Ok(value) = HeaderValue::from_str(&Uuid::new_v4().to_string()) {
            request.headers.insert(name, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::Method;

    fn request() -> ApiRequest {
        ApiRequest::new(Method::GET, "http://localhost/api/products")
    }

    #[test]
    fn test_bearer_attached_for_real_token() {
        let session = SessionContext::with_token("jwt-abc");
        let mut req = request();
        BearerAuth::new(session).intercept(&mut req);
        assert_eq!(req.header("authorization"), Some("Bearer jwt-abc"));
    }

    #[test]
    fn test_no_header_without_token() {
        let mut req = request();
        BearerAuth::new(SessionContext::new()).intercept(&mut req);
        assert!(req.header("authorization").is_none());
    }

    #[test]
    fn test_caller_header_kept_without_token() {
        let session = SessionContext::with_token("jwt-abc");
        let auth = BearerAuth::new(session.clone());
        session.clear();

        let mut req = request();
        req.headers
            .insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        auth.intercept(&mut req);
        assert_eq!(req.header("authorization"), Some("Basic abc"));
    }

    #[test]
    fn test_session_token_replaces_caller_header() {
        let mut req = request();
        req.headers
            .insert(AUTHORIZATION, HeaderValue::from_static("Basic abc"));
        BearerAuth::new(SessionContext::with_token("jwt-abc")).intercept(&mut req);
        assert_eq!(req.header("authorization"), Some("Bearer jwt-abc"));
    }

    #[test]
    fn test_request_id_added_once() {
        let mut req = request();
        RequestId.intercept(&mut req);
        let first = req.header(REQUEST_ID_HEADER).unwrap().to_string();
        assert!(Uuid::parse_str(&first).is_ok());

        RequestId.intercept(&mut req);
        assert_eq!(req.header(REQUEST_ID_HEADER), Some(first.as_str()));
    }
}
