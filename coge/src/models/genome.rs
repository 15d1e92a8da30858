use super::record::{additional_metadata, coge_object};
use super::{Fields, Hydrate, Metadata, Organism, Record};
use crate::types::{ExperimentId, GenomeId, OrganismId};
use serde_json::Value;

/// A genome assembly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Genome {
    pub record: Record<GenomeId>,
    pub link: Option<String>,
    pub version: Option<String>,
    pub source_name: Option<String>,
    pub organism: Option<Organism>,
    pub sequence_type: Option<SequenceType>,
    /// `true` unless the service says otherwise.
    pub restricted: bool,
    pub deleted: bool,
    pub chromosome_count: u32,
    pub additional_metadata: Vec<Metadata>,
    pub experiments: Vec<ExperimentId>,
}

coge_object!(Genome, GenomeId);

impl Default for Genome {
    fn default() -> Self {
        Self {
            record: Record::default(),
            link: None,
            version: None,
            source_name: None,
            organism: None,
            sequence_type: None,
            restricted: true,
            deleted: false,
            chromosome_count: 0,
            additional_metadata: Vec::new(),
            experiments: Vec::new(),
        }
    }
}

impl Genome {
    /// A genome known only by its id.
    pub fn with_id(id: GenomeId) -> Self {
        Self {
            record: Record::new(id, None, None),
            ..Default::default()
        }
    }

    /// Id of the owning organism, if known. An organism known only by name
    /// has no id.
    pub fn organism_id(&self) -> Option<OrganismId> {
        self.organism
            .as_ref()
            .map(|o| o.record.id)
            .filter(|id| id.0 != 0)
    }

    /// Hydrate a genome referenced from another entity, which may be
    /// either a (partial) genome object or a bare id.
    pub(crate) fn from_reference(value: &Value) -> Option<Self> {
        match value {
            Value::Object(o) => Some(Self::from_object(o)),
            other => super::fields::as_u64(other)
                .and_then(|n| u32::try_from(n).ok())
                .map(|id| Self::with_id(GenomeId(id))),
        }
    }
}

impl Hydrate for Genome {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            record: Record::hydrate(fields),
            link: fields.string("link"),
            version: fields.string("version"),
            source_name: fields.string("source_name"),
            organism: organism(fields),
            sequence_type: fields.value("sequence_type").and_then(SequenceType::from_value),
            restricted: fields.bool("restricted").unwrap_or(true),
            deleted: fields.bool("deleted").unwrap_or(false),
            chromosome_count: fields.u32("chromosome_count").unwrap_or_default(),
            additional_metadata: additional_metadata(fields),
            experiments: fields.u32s("experiments").into_iter().map(ExperimentId).collect(),
        }
    }
}

/// The owning organism is sent as an embedded object, as a bare id or name,
/// or as a separate `organism_id`.
fn organism(fields: Fields<'_>) -> Option<Organism> {
    match fields.value("organism") {
        Some(Value::Object(o)) => Some(Organism::from_object(o)),
        Some(Value::Number(n)) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .map(|id| Organism::with_id(OrganismId(id))),
        Some(Value::String(name)) => Some(Organism {
            record: Record::new(OrganismId::default(), Some(name.clone()), None),
            genomes: Vec::new(),
        }),
        _ => fields.u32("organism_id").map(|id| Organism::with_id(OrganismId(id))),
    }
}

/// Kind of sequence in a genome, e.g. `unmasked`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SequenceType {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl SequenceType {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Object(o) => Some(Self::from_object(o)),
            Value::String(s) => Some(Self::new(s.as_str())),
            _ => None,
        }
    }
}

impl Hydrate for SequenceType {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            name: fields.string("name"),
            description: fields.string("description"),
        }
    }
}
