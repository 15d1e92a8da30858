use super::record::{additional_metadata, coge_object};
use super::{Fields, Hydrate, Metadata, Record};
use crate::types::{ExperimentId, GenomeId, NotebookId};
use serde::Serialize;

/// A notebook: a named, ordered collection of genomes and experiments.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notebook {
    pub record: Record<NotebookId>,
    pub notebook_type: Option<String>,
    pub restricted: bool,
    pub additional_metadata: Vec<Metadata>,
    pub items: Vec<Item>,
}

coge_object!(Notebook, NotebookId);

impl Hydrate for Notebook {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            record: Record::hydrate(fields),
            notebook_type: fields.string("type"),
            restricted: fields.bool("restricted").unwrap_or_default(),
            additional_metadata: additional_metadata(fields),
            items: fields.objects("items").map(Item::hydrate).collect(),
        }
    }
}

/// A member of a notebook, discriminated by `item_type`, e.g. `"genome"`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: u32,
    #[serde(rename = "type")]
    pub item_type: String,
}

impl Item {
    pub fn new(id: u32, item_type: impl Into<String>) -> Self {
        Self {
            id,
            item_type: item_type.into(),
        }
    }

    pub fn genome(id: GenomeId) -> Self {
        Self::new(id.0, "genome")
    }

    pub fn experiment(id: ExperimentId) -> Self {
        Self::new(id.0, "experiment")
    }
}

impl Hydrate for Item {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            id: fields.u32("id").unwrap_or_default(),
            item_type: fields.string("type").unwrap_or_default(),
        }
    }
}
