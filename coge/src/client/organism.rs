use super::coge::CogeClient;
use super::dispatch::{Endpoint, Resource};
use super::transport::HttpMethod;
use crate::errors::CogeError;
use crate::models::{CogeResponse, Organism};
use crate::types::OrganismId;
use serde::Serialize;

#[derive(Serialize)]
struct AddOrganismBody<'a> {
    name: &'a str,
    description: &'a str,
}

impl CogeClient {
    /// Search for organisms by name or description.
    pub fn search_organisms(&self, term: &str) -> Result<Vec<Organism>, CogeError> {
        self.search(Resource::Organisms, term)
    }

    pub fn fetch_organism(&self, id: OrganismId) -> Result<Organism, CogeError> {
        self.fetch(Resource::Organisms, id)
    }

    /// Add an organism to CoGe. The new organism's id is in the response.
    pub fn add_organism(&self, name: &str, description: &str) -> Result<CogeResponse, CogeError> {
        let body = AddOrganismBody { name, description };
        self.mutate(
            HttpMethod::Put,
            &Endpoint::collection(Resource::Organisms),
            Some(&body),
        )
    }
}
