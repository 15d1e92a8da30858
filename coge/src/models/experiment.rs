use super::record::{additional_metadata, coge_object};
use super::{Fields, Hydrate, Metadata, Record};
use crate::types::{ExperimentId, GenomeId};
use std::collections::BTreeMap;

/// An experiment (quantitative, variant, alignment, ...) loaded onto a genome.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Experiment {
    pub record: Record<ExperimentId>,
    pub link: Option<String>,
    pub version: Option<String>,
    pub genome_id: GenomeId,
    pub source: Option<String>,
    /// Type name to type description.
    pub types: BTreeMap<String, String>,
    pub restricted: bool,
    pub additional_metadata: Vec<Metadata>,
}

coge_object!(Experiment, ExperimentId);

impl Hydrate for Experiment {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            record: Record::hydrate(fields),
            link: fields.string("link"),
            version: fields.string("version"),
            genome_id: fields.u32("genome_id").map(GenomeId).unwrap_or_default(),
            source: fields.string("source"),
            types: fields
                .objects("types")
                .filter_map(|t| Some((t.string("name")?, t.string("description")?)))
                .collect(),
            restricted: fields.bool("restricted").unwrap_or_default(),
            additional_metadata: additional_metadata(fields),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CogeObject;
    use serde_json::json;

    #[test]
    fn test_experiment() {
        let json = json!({
            "id": 2004,
            "name": "RNA-seq leaf",
            "genome_id": 16911,
            "source": "LIS",
            "types": [
                {"name": "expression", "description": "normalized read depth"},
                {"name": "incomplete"},
                {"name": "quantitative", "description": "numeric track"}
            ],
            "restricted": true
        });
        let e = Experiment::from_object(json.as_object().unwrap());
        assert_eq!(e.id(), ExperimentId(2004));
        assert_eq!(e.genome_id, GenomeId(16911));
        assert_eq!(e.source.as_deref(), Some("LIS"));
        assert_eq!(e.types.len(), 2);
        assert_eq!(e.types["expression"], "normalized read depth");
        assert!(e.restricted);
        assert!(e.additional_metadata.is_empty());
        assert_eq!(e.link, None);
    }
}
