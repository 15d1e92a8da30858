use super::{Fields, Genome, Hydrate};
use crate::errors::CogeError;
use crate::models::CogeObject;
use crate::types::{FeatureId, GenomeId};
use log::debug;
use serde::Serialize;

/// Looks up a genome by id, e.g. [crate::CogeClient::fetch_genome].
pub type GenomeResolver<'a> = &'a dyn Fn(GenomeId) -> Result<Genome, CogeError>;

/// A genomic feature (gene, mRNA, CDS, ...).
///
/// Unlike the other entities, a feature is not a [super::Record]: CoGe does
/// not guarantee it a name or description.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Feature {
    pub id: FeatureId,
    pub feature_type: Option<String>,
    pub name: Option<String>,
    pub names: Vec<String>,
    pub chromosome: Option<String>,
    /// The genome this feature is on. Without a [GenomeResolver] this is only
    /// what the service embeds, typically just `id`, `version` and organism name.
    pub genome: Option<Genome>,
    pub start: u64,
    pub stop: u64,
    pub strand: i32,
    pub locations: Vec<Location>,
    pub annotations: Vec<Annotation>,
    pub sequence: Option<String>,
}

impl Feature {
    pub fn genome_id(&self) -> Option<GenomeId> {
        self.genome.as_ref().map(|g| g.id())
    }

    /// Hydrate a feature, replacing its embedded genome with the one returned
    /// by `resolver`. The resolver is only called when it is given and the
    /// document has a `genome` which names an id.
    pub fn hydrate_with(
        fields: Fields<'_>,
        resolver: Option<GenomeResolver<'_>>,
    ) -> Result<Self, CogeError> {
        let mut feature = Self::hydrate(fields);
        if let (Some(resolve), Some(id)) = (resolver, feature.genome_id()) {
            if id.0 == 0 {
                debug!("feature {} embeds a genome without id, not resolving", feature.id);
            } else {
                feature.genome = Some(resolve(id)?);
            }
        }
        Ok(feature)
    }
}

impl Hydrate for Feature {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            id: fields.u64("id").map(FeatureId).unwrap_or_default(),
            feature_type: fields.string("type"),
            name: fields.string("name"),
            names: fields.strings("names"),
            chromosome: fields.text("chromosome"),
            genome: fields.value("genome").and_then(Genome::from_reference),
            start: fields.u64("start").unwrap_or_default(),
            stop: fields.u64("stop").unwrap_or_default(),
            strand: strand(fields),
            locations: fields.objects("locations").map(Location::hydrate).collect(),
            annotations: fields.objects("annotations").map(Annotation::hydrate).collect(),
            sequence: fields.string("sequence"),
        }
    }
}

fn strand(fields: Fields<'_>) -> i32 {
    fields
        .i64("strand")
        .and_then(|s| i32::try_from(s).ok())
        .unwrap_or_default()
}

/// One segment of a (possibly spliced) feature.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Location {
    pub start: u64,
    pub stop: u64,
    pub strand: i32,
}

impl Hydrate for Location {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            start: fields.u64("start").unwrap_or_default(),
            stop: fields.u64("stop").unwrap_or_default(),
            strand: strand(fields),
        }
    }
}

/// e.g. `{"category": "db_xref", "type": "CDD", "value": "28970"}`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Annotation {
    pub category: Option<String>,
    pub annotation_type: Option<String>,
    pub value: Option<String>,
}

impl Hydrate for Annotation {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            category: fields.string("category"),
            annotation_type: fields.string("type"),
            value: fields.text("value"),
        }
    }
}

/// Metadata describing a set of features loaded onto a genome from a GFF file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct FeatureSetMetadata {
    pub name: String,
    pub description: String,
    pub version: String,
    pub source_name: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use std::cell::Cell;

    fn revoluta() -> Value {
        json!({
            "annotations": [
                {"category": "db_xref", "type": "CDD", "value": "28970"},
                {"type": "note", "value": "Homeodomain"}
            ],
            "chromosome": "5",
            "genome": {"id": 18626, "organism": "Arabidopsis thaliana (thale cress)", "version": "1"},
            "id": 341489236,
            "locations": [
                {"start": 24397806, "stop": 24397966, "strand": 1},
                {"start": 24398275, "stop": 24398296, "strand": 1}
            ],
            "names": ["AT5G60690", "REV", "REVOLUTA"],
            "sequence": "aagtacgttaggtacacagctgagcaagtcgagg",
            "start": 24397806,
            "stop": 24398296,
            "strand": 1,
            "type": "misc_feature"
        })
    }

    #[test]
    fn test_without_resolver() {
        let json = revoluta();
        let f = Feature::hydrate_with(Fields::new(json.as_object().unwrap()), None).unwrap();
        assert_eq!(f.id, FeatureId(341489236));
        assert_eq!(f.feature_type.as_deref(), Some("misc_feature"));
        assert_eq!(f.name, None);
        assert_eq!(f.names, vec!["AT5G60690", "REV", "REVOLUTA"]);
        assert_eq!(f.chromosome.as_deref(), Some("5"));
        assert_eq!((f.start, f.stop, f.strand), (24397806, 24398296, 1));
        assert_eq!(f.locations.len(), 2);
        assert_eq!(f.locations[1].start, 24398275);
        assert_eq!(f.annotations[0].category.as_deref(), Some("db_xref"));
        assert_eq!(f.annotations[1].category, None);
        assert_eq!(f.genome_id(), Some(GenomeId(18626)));
        let embedded = f.genome.unwrap();
        assert_eq!(embedded.version.as_deref(), Some("1"));
        assert_eq!(embedded.organism.and_then(|o| o.record.name).as_deref(), Some("Arabidopsis thaliana (thale cress)"));
    }

    #[test]
    fn test_resolver_replaces_embedded_genome() {
        let json = revoluta();
        let calls = Cell::new(0);
        let resolve = |id: GenomeId| -> Result<Genome, CogeError> {
            calls.set(calls.get() + 1);
            let mut g = Genome::with_id(id);
            g.chromosome_count = 7;
            Ok(g)
        };
        let f = Feature::hydrate_with(Fields::new(json.as_object().unwrap()), Some(&resolve)).unwrap();
        assert_eq!(calls.get(), 1);
        assert_eq!(f.genome_id(), Some(GenomeId(18626)));
        assert_eq!(f.genome.unwrap().chromosome_count, 7);
    }

    #[test]
    fn test_resolver_not_called_without_genome() {
        let json = json!({"id": 1, "type": "gene", "strand": -1});
        let resolve = |_: GenomeId| -> Result<Genome, CogeError> { panic!("should not be called") };
        let f = Feature::hydrate_with(Fields::new(json.as_object().unwrap()), Some(&resolve)).unwrap();
        assert_eq!(f.strand, -1);
        assert!(f.genome.is_none());
    }

    #[test]
    fn test_resolver_error_propagates() {
        let json = json!({"id": 1, "genome": {"id": 99}});
        let resolve = |_: GenomeId| -> Result<Genome, CogeError> {
            Err(CogeError::service(json!({"message": "not found"})))
        };
        let err = Feature::hydrate_with(Fields::new(json.as_object().unwrap()), Some(&resolve)).unwrap_err();
        assert_eq!(err.service_message(), Some("not found"));
    }
}
