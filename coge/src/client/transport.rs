//! The HTTP round-trip, described as plain data.
//!
//! The dispatcher builds an [ApiRequest] and hands it to a [Transport].
//! [ReqwestTransport] performs it with a blocking reqwest client; any other
//! implementation (e.g. canned responses in tests) can be swapped in with
//! [crate::CogeClient::with_transport].

use crate::errors::CogeError;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Put,
    Post,
    Delete,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Put => "PUT",
            HttpMethod::Post => "POST",
            HttpMethod::Delete => "DELETE",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    Json(Value),
    /// `application/x-www-form-urlencoded` pairs.
    Form(Vec<(String, String)>),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ApiRequest {
    pub method: HttpMethod,
    /// Fully-qualified URL including the query string.
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<RequestBody>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    pub status: u16,
    pub body: String,
}

impl ApiResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs one HTTP request, reading the whole response body.
///
/// Transports are [Send], so a [crate::CogeClient] may be built on one thread
/// and used on another.
pub trait Transport: Send {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, CogeError>;
}

/// [Transport] over a blocking [reqwest::blocking::Client].
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::blocking::Client,
}

impl ReqwestTransport {
    pub fn new() -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::ClientBuilder::new()
            .default_headers(accept_json())
            .build()?;
        Ok(Self { client })
    }

    /// Use an already-configured client, e.g. one with a proxy or timeout.
    pub fn with_client(client: reqwest::blocking::Client) -> Self {
        Self { client }
    }
}

fn accept_json() -> HeaderMap {
    HeaderMap::from_iter([(ACCEPT, HeaderValue::from_static("application/json"))])
}

impl Transport for ReqwestTransport {
    fn execute(&self, request: ApiRequest) -> Result<ApiResponse, CogeError> {
        let method = match request.method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
        };
        let mut req = self.client.request(method, &request.url);
        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }
        req = match &request.body {
            Some(RequestBody::Json(body)) => req.json(body),
            Some(RequestBody::Form(pairs)) => req.form(pairs),
            None => req,
        };
        let res = req.send()?;
        let status = res.status().as_u16();
        let body = res.text()?;
        Ok(ApiResponse { status, body })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::*;

    #[rstest]
    #[case(200, true)]
    #[case(201, true)]
    #[case(404, false)]
    #[case(500, false)]
    fn test_is_success(#[case] status: u16, #[case] expected: bool) {
        assert_eq!(ApiResponse::new(status, "").is_success(), expected)
    }

    #[test]
    fn test_reqwest_transport_is_send() {
        fn assert_send<T: Send>() {}
        assert_send::<ReqwestTransport>();
        assert_send::<Box<dyn Transport>>();
    }

    #[test]
    fn test_method_display() {
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
