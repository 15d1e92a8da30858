use super::coge::CogeClient;
use super::dispatch::{Endpoint, Resource};
use super::transport::HttpMethod;
use crate::errors::CogeError;
use crate::models::{CogeResponse, Item, Notebook};
use crate::types::NotebookId;
use serde::Serialize;

#[derive(Serialize)]
struct AddItemsBody<'a> {
    items: &'a [Item],
}

impl CogeClient {
    pub fn search_notebooks(&self, term: &str) -> Result<Vec<Notebook>, CogeError> {
        self.search(Resource::Notebooks, term)
    }

    pub fn fetch_notebook(&self, id: NotebookId) -> Result<Notebook, CogeError> {
        self.fetch(Resource::Notebooks, id)
    }

    /// Append genomes and/or experiments to a notebook, in the given order.
    pub fn add_items_to_notebook(
        &self,
        id: NotebookId,
        items: &[Item],
    ) -> Result<CogeResponse, CogeError> {
        let endpoint = Endpoint::item(Resource::Notebooks, id).join("items/add");
        self.mutate(HttpMethod::Post, &endpoint, Some(&AddItemsBody { items }))
    }
}
