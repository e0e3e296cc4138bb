#![allow(dead_code)]

use async_trait::async_trait;
use serde_json::{Value, json};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use tutoradmin_core::Envelope;
use tutoradmin_core::error::{AdminError, Result};
use tutoradmin_core::models::Admin;
use tutoradmin_core::session::SessionStore;
use tutoradmin_core::storage::MemoryKeyValueStore;
use tutoradmin_interaction::{ApiClient, HttpRequest, HttpTransport, RawResponse};

pub const BASE_URL: &str = "http://localhost:5000/api";

/// Plays back scripted responses in order and records every request.
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<Result<RawResponse>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockTransport {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn push(&self, response: Result<RawResponse>) {
        self.responses.lock().unwrap().push_back(response);
    }

    /// Queues a successful envelope wrapping `data`.
    pub fn push_data(&self, data: Value) {
        let envelope = serde_json::to_value(Envelope::ok(data)).unwrap();
        self.push(Ok(RawResponse::json(200, &envelope)));
    }

    pub fn push_json(&self, status: u16, body: Value) {
        self.push(Ok(RawResponse::json(status, &body)));
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last_request(&self) -> HttpRequest {
        self.requests
            .lock()
            .unwrap()
            .last()
            .cloned()
            .expect("no request recorded")
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn execute(&self, request: HttpRequest) -> Result<RawResponse> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(AdminError::network("no scripted response")))
    }
}

pub fn empty_session() -> Arc<SessionStore> {
    Arc::new(SessionStore::new(Arc::new(MemoryKeyValueStore::new())))
}

pub fn admin(id: &str) -> Admin {
    serde_json::from_value(admin_json(id)).unwrap()
}

pub fn admin_json(id: &str) -> Value {
    json!({
        "id": id,
        "name": "Ada Admin",
        "email": "a@b.com",
        "role": "admin",
        "createdAt": "2024-01-01T00:00:00Z"
    })
}

pub fn client_with(transport: &Arc<MockTransport>, session: Arc<SessionStore>) -> ApiClient {
    ApiClient::new(BASE_URL, transport.clone(), session)
}

/// Splits the query string of a recorded URL into decoded pairs.
pub fn query_pairs(request: &HttpRequest) -> Vec<(String, String)> {
    reqwest::Url::parse(&request.url)
        .unwrap()
        .query_pairs()
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

pub fn path_of(request: &HttpRequest) -> String {
    reqwest::Url::parse(&request.url).unwrap().path().to_string()
}
