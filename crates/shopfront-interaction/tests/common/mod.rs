#![allow(dead_code)]

use async_trait::async_trait;
use reqwest::StatusCode;
use serde_json::{Value, json};
use shopfront_core::{ClientConfig, SessionContext};
use shopfront_interaction::{ApiClient, ApiRequest, RawResponse, Transport, TransportError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Transport that replays scripted outcomes and records every request it sees.
#[derive(Default)]
pub struct MockTransport {
    outcomes: Mutex<VecDeque<Result<RawResponse, TransportError>>>,
    requests: Mutex<Vec<ApiRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, outcome: Result<RawResponse, TransportError>) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(Ok(RawResponse::new(
            StatusCode::from_u16(status).unwrap(),
            serde_json::to_vec(&body).unwrap(),
        )));
    }

    pub fn push_ok(&self, data: Value) {
        self.push_json(200, json!({"code": "OK", "message": "success", "data": data}));
    }

    pub fn push_code(&self, status: u16, code: &str, message: &str) {
        self.push_json(status, json!({"code": code, "message": message, "data": null}));
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> ApiRequest {
        self.requests().last().cloned().expect("no request was sent")
    }
}

#[async_trait]
impl Transport for MockTransport {
    async fn send(&self, request: ApiRequest) -> Result<RawResponse, TransportError> {
        self.requests.lock().unwrap().push(request);
        self.outcomes
            .lock()
            .unwrap()
            .pop_front()
            .expect("MockTransport ran out of scripted responses")
    }
}

pub fn client_with(session: SessionContext) -> (ApiClient, Arc<MockTransport>) {
    let transport = MockTransport::new();
    let client = ApiClient::with_transport(
        ClientConfig::new("http://shop.test/api"),
        session,
        transport.clone(),
    );
    (client, transport)
}
