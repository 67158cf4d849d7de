//! HTTP client for the storefront API.
//!
//! [`ApiClient`] is the only way the rest of the application talks to the
//! backend. It attaches the session's bearer token, unwraps the
//! `{ code, message, data }` envelope and reports every failure as a
//! [`shopfront_core::BusinessError`].

pub mod auth;
pub mod catalog;
pub mod client;
pub mod interceptor;
pub mod normalize;
pub mod transport;

pub use auth::{AuthService, AuthSession, LoginRequest, UserProfile};
pub use catalog::CatalogService;
pub use client::{ApiClient, RequestOptions};
pub use interceptor::{BearerAuth, RequestId, RequestInterceptor};
pub use normalize::{DEPENDENCY_UNAVAILABLE_MESSAGE, ResponseNormalizer};
pub use transport::{ApiRequest, RawResponse, ReqwestTransport, Transport, TransportError};
