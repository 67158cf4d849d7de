//! ApiClient - single chokepoint for all calls to the storefront API.
//!
//! Every call runs the same pipeline:
//! 1. Build an [`ApiRequest`] from the relative path and [`RequestOptions`]
//! 2. Run the request interceptors (bearer auth, request id, ...)
//! 3. Send through the [`Transport`]
//! 4. Normalize the outcome into the unwrapped payload or a [`BusinessError`]

use crate::interceptor::{BearerAuth, RequestId, RequestInterceptor};
use crate::normalize::ResponseNormalizer;
use crate::transport::{ApiRequest, ReqwestTransport, Transport};
use reqwest::Method;
use reqwest::header::{HeaderName, HeaderValue};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use shopfront_core::{BusinessError, ClientConfig, SessionContext};
use std::sync::Arc;

/// Per-call query parameters and extra headers.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    pub query: Vec<(String, String)>,
    pub headers: Vec<(String, String)>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Typed request surface over the storefront API.
#[derive(Clone)]
pub struct ApiClient {
    config: ClientConfig,
    session: SessionContext,
    transport: Arc<dyn Transport>,
    interceptors: Vec<Arc<dyn RequestInterceptor>>,
    normalizer: ResponseNormalizer,
}

impl ApiClient {
    /// Creates a client that talks HTTP via `reqwest` with the configured timeout.
    pub fn new(config: ClientConfig, session: SessionContext) -> Result<Self, BusinessError> {
        let transport = ReqwestTransport::new(config.timeout)
            .map_err(|e| BusinessError::internal(e.to_string()))?;
        Ok(Self::with_transport(config, session, Arc::new(transport)))
    }

    /// Creates a client over an arbitrary transport with the default interceptors.
    pub fn with_transport(
        config: ClientConfig,
        session: SessionContext,
        transport: Arc<dyn Transport>,
    ) -> Self {
        let interceptors: Vec<Arc<dyn RequestInterceptor>> = vec![
            Arc::new(BearerAuth::new(session.clone())),
            Arc::new(RequestId),
        ];
        Self {
            normalizer: ResponseNormalizer::new(session.clone()),
            config,
            session,
            transport,
            interceptors,
        }
    }

    /// Appends an interceptor that runs after the built-in ones.
    pub fn with_interceptor(mut self, interceptor: Arc<dyn RequestInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn session(&self) -> &SessionContext {
        &self.session
    }

    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, BusinessError> {
        self.request(Method::GET, path, None, options).await
    }

    pub async fn post<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, BusinessError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.request(Method::POST, path, body, options).await
    }

    pub async fn put<T, B>(
        &self,
        path: &str,
        body: Option<&B>,
        options: RequestOptions,
    ) -> Result<T, BusinessError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let body = encode_body(body)?;
        self.request(Method::PUT, path, body, options).await
    }

    pub async fn delete<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> Result<T, BusinessError> {
        self.request(Method::DELETE, path, None, options).await
    }

    /// Runs the full pipeline for one call.
    pub async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
        options: RequestOptions,
    ) -> Result<T, BusinessError> {
        let mut request = ApiRequest::new(method, self.config.endpoint(path));
        request.query = options.query;
        request.body = body;

        for (name, value) in options.headers {
            let name = HeaderName::from_bytes(name.as_bytes())
                .map_err(|e| BusinessError::internal(format!("Invalid header name '{}': {}", name, e)))?;
            let value = HeaderValue::from_str(&value)
                .map_err(|e| BusinessError::internal(format!("Invalid value for header '{}': {}", name, e)))?;
            request.headers.insert(name, value);
        }

        for interceptor in &self.interceptors {
            interceptor.intercept(&mut request);
        }

        tracing::debug!(
            "[ApiClient] {} {} (request id: {}, authorization header: {})",
            request.method,
            request.url,
            request.header(crate::interceptor::REQUEST_ID_HEADER).unwrap_or("-"),
            request.headers.contains_key(reqwest::header::AUTHORIZATION)
        );

        let outcome = self.transport.send(request).await;
        self.normalizer.normalize(outcome)
    }
}

fn encode_body<B: Serialize + ?Sized>(body: Option<&B>) -> Result<Option<Value>, BusinessError> {
    body.map(serde_json::to_value)
        .transpose()
        .map_err(|e| BusinessError::internal(format!("Failed to serialize request body: {}", e)))
}
