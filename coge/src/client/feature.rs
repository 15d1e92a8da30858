use super::coge::{CogeClient, SourceData};
use super::dispatch::{Access, Endpoint, Resource};
use super::transport::HttpMethod;
use crate::errors::CogeError;
use crate::models::{CogeResponse, Feature, FeatureSetMetadata, Fields, GenomeResolver};
use crate::types::{FeatureId, GenomeId};
use serde::Serialize;

#[derive(Serialize)]
struct AddFeaturesBody<'a> {
    genome_id: GenomeId,
    metadata: &'a FeatureSetMetadata,
    source_data: [SourceData<'a>; 1],
}

impl CogeClient {
    /// Search for features by name.
    ///
    /// With `resolve_genome`, the genome of every feature is fetched in full,
    /// one request per feature. Otherwise each feature only carries the
    /// partial genome the service embeds in it.
    pub fn search_features(
        &self,
        term: &str,
        resolve_genome: bool,
    ) -> Result<Vec<Feature>, CogeError> {
        let resolve = |id: GenomeId| self.fetch_genome(id);
        let resolver: GenomeResolver<'_> = &resolve;
        self.search_with(Resource::Features, term, |fields| {
            Feature::hydrate_with(fields, resolve_genome.then_some(resolver))
        })
    }

    /// Fetch a feature, see [CogeClient::search_features] for `resolve_genome`.
    pub fn fetch_feature(&self, id: FeatureId, resolve_genome: bool) -> Result<Feature, CogeError> {
        let document = self.get_object(&Endpoint::item(Resource::Features, id), Access::Public)?;
        let resolve = |id: GenomeId| self.fetch_genome(id);
        let resolver: GenomeResolver<'_> = &resolve;
        Feature::hydrate_with(Fields::new(&document), resolve_genome.then_some(resolver))
    }

    /// Get the sequence of a feature as FASTA.
    pub fn fetch_feature_sequence(&self, id: FeatureId) -> Result<String, CogeError> {
        self.get_text(&Endpoint::item(Resource::Features, id).join("sequence"))
    }

    /// Load a set of features onto a genome from a GFF file (which may be
    /// gzipped) in the data store.
    pub fn add_features(
        &self,
        genome_id: GenomeId,
        metadata: &FeatureSetMetadata,
        irods_path: &str,
    ) -> Result<CogeResponse, CogeError> {
        let body = AddFeaturesBody {
            genome_id,
            metadata,
            source_data: SourceData::irods(irods_path),
        };
        self.mutate(
            HttpMethod::Put,
            &Endpoint::collection(Resource::Features),
            Some(&body),
        )
    }
}
