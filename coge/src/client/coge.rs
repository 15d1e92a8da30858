use super::credentials::Credentials;
use super::dispatch::{Access, Dispatcher, Endpoint, Resource};
use super::envelope;
use super::transport::{HttpMethod, ReqwestTransport, Transport};
use crate::errors::CogeError;
use crate::models::{CogeResponse, Fields, Hydrate};
use crate::types::{BaseUrl, Username};
use serde::Serialize;
use serde_json::{Map, Value};

/// CoGe web service client.
///
/// Every method performs one blocking request (two for a feature whose
/// genome is resolved) and returns once the response is fully read and
/// hydrated. Methods are grouped by resource: organisms, genomes, features,
/// experiments, notebooks, groups and the data store.
pub struct CogeClient {
    dispatcher: Dispatcher,
}

impl CogeClient {
    /// Create a client which talks HTTP(S) using [ReqwestTransport].
    pub fn new(credentials: Credentials) -> Result<Self, CogeError> {
        Ok(Self::with_transport(credentials, ReqwestTransport::new()?))
    }

    /// Create a client for public, read-only calls.
    pub fn anonymous(base_url: BaseUrl) -> Result<Self, CogeError> {
        Self::new(Credentials::anonymous(base_url))
    }

    pub fn authenticated(
        base_url: BaseUrl,
        username: Username,
        token: impl Into<String>,
    ) -> Result<Self, CogeError> {
        Self::new(Credentials::authenticated(base_url, username, token))
    }

    /// Create a client which performs its requests using the given transport.
    pub fn with_transport(credentials: Credentials, transport: impl Transport + 'static) -> Self {
        Self {
            dispatcher: Dispatcher::new(credentials, Box::new(transport)),
        }
    }

    pub fn credentials(&self) -> &Credentials {
        self.dispatcher.credentials()
    }

    /// GET `{resource}/search/{term}`, hydrating each member of the result
    /// array in server order.
    pub(crate) fn search_with<T>(
        &self,
        resource: Resource,
        term: &str,
        hydrate: impl FnMut(Fields<'_>) -> Result<T, CogeError>,
    ) -> Result<Vec<T>, CogeError> {
        let endpoint = Endpoint::search(resource, term);
        let document = self.get_object(&endpoint, Access::Public)?;
        envelope::hydrate_named(&document, resource.key(), hydrate)
    }

    pub(crate) fn search<T: Hydrate>(
        &self,
        resource: Resource,
        term: &str,
    ) -> Result<Vec<T>, CogeError> {
        self.search_with(resource, term, |fields| Ok(T::hydrate(fields)))
    }

    /// GET `{resource}/{id}`.
    pub(crate) fn fetch<T: Hydrate>(
        &self,
        resource: Resource,
        id: impl std::fmt::Display,
    ) -> Result<T, CogeError> {
        let document = self.get_object(&Endpoint::item(resource, id), Access::Public)?;
        Ok(T::from_object(&document))
    }

    pub(crate) fn get_object(
        &self,
        endpoint: &Endpoint,
        access: Access,
    ) -> Result<Map<String, Value>, CogeError> {
        envelope::into_object(self.dispatcher.get(endpoint, access)?)
    }

    /// GET a plain-text document such as a FASTA sequence.
    pub(crate) fn get_text(&self, endpoint: &Endpoint) -> Result<String, CogeError> {
        self.dispatcher.get_text(endpoint)
    }

    /// Send an authenticated add, update or delete request.
    pub(crate) fn mutate<B: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        endpoint: &Endpoint,
        body: Option<&B>,
    ) -> Result<CogeResponse, CogeError> {
        let document = self
            .dispatcher
            .json(method, endpoint, Access::Authenticated, body)?;
        Ok(CogeResponse::from_object(&envelope::into_object(document)?))
    }
}

/// `{"type": "irods", "path": ...}`, the location of a file in the data store
/// which CoGe should load.
#[derive(Serialize)]
pub(crate) struct SourceData<'a> {
    #[serde(rename = "type")]
    source_type: &'static str,
    path: &'a str,
}

impl<'a> SourceData<'a> {
    pub fn irods(path: &'a str) -> [Self; 1] {
        [Self {
            source_type: "irods",
            path,
        }]
    }
}
