use super::record::coge_object;
use super::{Fields, Hydrate, Record};
use crate::types::{GenomeId, OrganismId};

/// An organism. Its genomes are referenced by id, not embedded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Organism {
    pub record: Record<OrganismId>,
    pub genomes: Vec<GenomeId>,
}

coge_object!(Organism, OrganismId);

impl Organism {
    /// An organism known only by its id, e.g. the owner of a genome to be added.
    pub fn with_id(id: OrganismId) -> Self {
        Self {
            record: Record::new(id, None, None),
            genomes: Vec::new(),
        }
    }
}

impl Hydrate for Organism {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            record: Record::hydrate(fields),
            genomes: fields.u32s("genomes").into_iter().map(GenomeId).collect(),
        }
    }
}
