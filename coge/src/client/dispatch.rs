//! Builds URLs and issues requests against `{base_url}/{resource}[/{id}][/{subpath}][?params]`.

use super::credentials::{AuthParams, Credentials};
use super::envelope;
use super::transport::{ApiRequest, ApiResponse, HttpMethod, RequestBody, Transport};
use crate::errors::CogeError;
use log::debug;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// Resource keys: the lowercase plural names used both in URL paths and as
/// the envelope key of search results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    Organisms,
    Genomes,
    Features,
    Experiments,
    Notebooks,
    Groups,
    /// The data store.
    Irods,
}

impl Resource {
    pub fn key(&self) -> &'static str {
        match self {
            Resource::Organisms => "organisms",
            Resource::Genomes => "genomes",
            Resource::Features => "features",
            Resource::Experiments => "experiments",
            Resource::Notebooks => "notebooks",
            Resource::Groups => "groups",
            Resource::Irods => "irods",
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Escape a search term or path segment for use in a URL.
///
/// Only spaces are escaped. Other reserved characters reach the service as given.
pub fn escape_spaces(s: &str) -> String {
    s.replace(' ', "%20")
}

/// Everything after the base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    resource: Resource,
    id: Option<String>,
    subpath: Vec<String>,
    query: Vec<(String, String)>,
}

impl Endpoint {
    /// `{resource}`
    pub fn collection(resource: Resource) -> Self {
        Self {
            resource,
            id: None,
            subpath: Vec::new(),
            query: Vec::new(),
        }
    }

    /// `{resource}/{id}`
    pub fn item(resource: Resource, id: impl fmt::Display) -> Self {
        Self {
            id: Some(id.to_string()),
            ..Self::collection(resource)
        }
    }

    /// `{resource}/search/{term}`
    pub fn search(resource: Resource, term: &str) -> Self {
        Self::collection(resource).join("search").join(term)
    }

    /// Append a path segment (or several, separated by `/`).
    pub fn join(mut self, segment: &str) -> Self {
        self.subpath.push(escape_spaces(segment));
        self
    }

    /// Append a query string parameter.
    pub fn param(mut self, key: &str, value: impl fmt::Display) -> Self {
        self.query.push((key.to_string(), value.to_string()));
        self
    }

    fn path(&self) -> String {
        let mut path = self.resource.key().to_string();
        for segment in self.id.iter().chain(self.subpath.iter()) {
            path.push('/');
            path.push_str(segment);
        }
        path
    }
}

/// Whether a request carries the `username` and `token` parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Access {
    Public,
    Authenticated,
}

/// The single path by which every facade call reaches the service.
pub(crate) struct Dispatcher {
    credentials: Credentials,
    transport: Box<dyn Transport>,
}

impl Dispatcher {
    pub fn new(credentials: Credentials, transport: Box<dyn Transport>) -> Self {
        Self {
            credentials,
            transport,
        }
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Produce the fully-qualified URL for an endpoint.
    pub fn url(&self, endpoint: &Endpoint, auth: Option<&AuthParams>) -> Result<String, CogeError> {
        let mut url = format!("{}/{}", self.credentials.base_url().trimmed(), endpoint.path());
        let mut query: Vec<(&str, &str)> = endpoint
            .query
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        if let Some(auth) = auth {
            query.push(("username", auth.username.as_str()));
            query.push(("token", auth.token));
        }
        if !query.is_empty() {
            url.push('?');
            url.push_str(&serde_urlencoded::to_string(&query)?);
        }
        Ok(url)
    }

    /// Send a request. For [Access::Authenticated], missing credentials fail
    /// here, before anything reaches the transport.
    pub fn send<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint,
        access: Access,
        body: Option<&B>,
    ) -> Result<ApiResponse, CogeError> {
        let auth = match access {
            Access::Public => None,
            Access::Authenticated => Some(self.credentials.require()?),
        };
        let url = self.url(endpoint, auth.as_ref())?;
        let body = body
            .map(serde_json::to_value)
            .transpose()?
            .map(RequestBody::Json);
        match &auth {
            None => debug!("{} {}", method, url),
            Some(auth) => debug!(
                "{} {} (as {})",
                method,
                self.url(endpoint, None)?,
                auth.username
            ),
        }
        self.transport.execute(ApiRequest {
            method,
            url,
            headers: Vec::new(),
            body,
        })
    }

    /// Send a request and return its envelope-checked JSON document.
    pub fn json<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint,
        access: Access,
        body: Option<&B>,
    ) -> Result<Value, CogeError> {
        let res = self.send(method, endpoint, access, body)?;
        envelope::parse(res)
    }

    /// GET a JSON document.
    pub fn get(&self, endpoint: &Endpoint, access: Access) -> Result<Value, CogeError> {
        self.json::<()>(HttpMethod::Get, endpoint, access, None)
    }

    /// GET a plain-text document, e.g. FASTA. The body is read to completion.
    pub fn get_text(&self, endpoint: &Endpoint) -> Result<String, CogeError> {
        let res = self.send::<()>(HttpMethod::Get, endpoint, Access::Public, None)?;
        envelope::parse_text(res)
    }
}
