#![allow(dead_code)]

use coge::errors::CogeError;
use coge::types::{BaseUrl, Username};
use coge::{ApiRequest, ApiResponse, CogeClient, Credentials, Transport};
use serde_json::Value;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub type AnyResult = Result<(), CogeError>;

pub const TESTING_URL: &str = "https://genomevolution.org/coge/api/v1";

/// A [Transport] which answers with queued responses and records every request.
///
/// Clones share their queue and log, so a test can keep one clone while the
/// client owns another.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<VecDeque<ApiResponse>>>,
    requests: Arc<Mutex<Vec<ApiRequest>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn respond(&self, status: u16, body: impl Into<String>) -> &Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(ApiResponse::new(status, body));
        self
    }

    pub fn json(&self, body: Value) -> &Self {
        self.respond(200, body.to_string())
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn urls(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.url.clone())
            .collect()
    }
}

impl Transport for FakeTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, CogeError> {
        let response = self
            .responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| panic!("no response queued for {}", request.url));
        self.requests.lock().unwrap().push(request);
        Ok(response)
    }
}

pub fn base_url() -> BaseUrl {
    BaseUrl::from_static(TESTING_URL)
}

pub fn anonymous_client(transport: &FakeTransport) -> CogeClient {
    CogeClient::with_transport(Credentials::anonymous(base_url()), transport.clone())
}

pub fn logged_in_client(transport: &FakeTransport) -> CogeClient {
    let credentials = Credentials::authenticated(base_url(), Username::from("sam"), "t0k");
    CogeClient::with_transport(credentials, transport.clone())
}

/// Expected URL of a public request.
pub fn url(path: &str) -> String {
    format!("{}/{}", TESTING_URL, path)
}

/// Expected URL of an authenticated request.
pub fn authed_url(path: &str) -> String {
    format!("{}/{}?username=sam&token=t0k", TESTING_URL, path)
}
