use super::coge::{CogeClient, SourceData};
use super::dispatch::{Access, Endpoint, Resource};
use super::envelope;
use super::transport::HttpMethod;
use crate::errors::CogeError;
use crate::models::{CogeObject, CogeResponse, Feature, Fields, Genome, Hydrate};
use crate::types::{GenomeId, OrganismId};
use log::warn;
use serde::Serialize;

/// Request body of a genome add or update. Unset fields are left out.
#[derive(Serialize)]
struct GenomeBody<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    organism_id: Option<OrganismId>,
    metadata: GenomeMetadata<'a>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_data: Option<[SourceData<'a>; 1]>,
}

#[derive(Serialize)]
struct GenomeMetadata<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    source_name: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sequence_type: Option<&'a str>,
    restricted: bool,
}

impl<'a> GenomeBody<'a> {
    fn new(genome: &'a Genome, source_data: Option<[SourceData<'a>; 1]>) -> Self {
        Self {
            organism_id: genome.organism_id(),
            metadata: GenomeMetadata {
                name: genome.name(),
                description: genome.description(),
                version: genome.version.as_deref(),
                source_name: genome.source_name.as_deref(),
                sequence_type: genome
                    .sequence_type
                    .as_ref()
                    .and_then(|t| t.name.as_deref()),
                restricted: genome.restricted,
            },
            source_data,
        }
    }
}

impl CogeClient {
    /// Search for genomes. Soft-deleted genomes are only included when
    /// `include_deleted` is set. Results are in the order the service sent them.
    pub fn search_genomes(
        &self,
        term: &str,
        include_deleted: bool,
    ) -> Result<Vec<Genome>, CogeError> {
        let genomes: Vec<Genome> = self.search(Resource::Genomes, term)?;
        Ok(genomes
            .into_iter()
            .filter(|g| include_deleted || !g.deleted)
            .collect())
    }

    pub fn fetch_genome(&self, id: GenomeId) -> Result<Genome, CogeError> {
        self.fetch(Resource::Genomes, id)
    }

    /// Get the whole genome as FASTA.
    pub fn fetch_genome_sequence(&self, id: GenomeId) -> Result<String, CogeError> {
        self.get_text(&sequence(id))
    }

    /// Get one chromosome of a genome as FASTA.
    pub fn fetch_chromosome_sequence(
        &self,
        id: GenomeId,
        chromosome: &str,
    ) -> Result<String, CogeError> {
        self.get_text(&sequence(id).join(chromosome))
    }

    /// Get the region `start..=stop` of a chromosome as FASTA.
    pub fn fetch_genome_subsequence(
        &self,
        id: GenomeId,
        chromosome: &str,
        start: u64,
        stop: u64,
    ) -> Result<String, CogeError> {
        let endpoint = sequence(id)
            .join(chromosome)
            .param("start", start)
            .param("stop", stop);
        self.get_text(&endpoint)
    }

    /// Get the features of a genome which have the given type, e.g. `"gene"`.
    ///
    /// The embedded genome of each feature is not resolved. If the service
    /// answers for a genome other than the one requested, the result is empty.
    pub fn fetch_genome_features(
        &self,
        id: GenomeId,
        feature_type: &str,
    ) -> Result<Vec<Feature>, CogeError> {
        let endpoint = Endpoint::item(Resource::Genomes, id)
            .join("features")
            .join(feature_type);
        let document = self.get_object(&endpoint, Access::Public)?;
        match Fields::new(&document).u32("id") {
            Some(echoed) if echoed == id.0 => {
                envelope::hydrate_named(&document, "features", |f| Ok(Feature::hydrate(f)))
            }
            echoed => {
                warn!(
                    "requested features of genome {} but got a response for {:?}",
                    id, echoed
                );
                Ok(Vec::new())
            }
        }
    }

    /// Add a genome to CoGe, loading its sequence from a FASTA file (which
    /// may be gzipped) in the data store.
    ///
    /// `genome` should have as many fields populated as possible, and no id.
    /// The response carries the id of the job which loads the genome.
    pub fn add_genome(&self, genome: &Genome, irods_path: &str) -> Result<CogeResponse, CogeError> {
        let body = GenomeBody::new(genome, Some(SourceData::irods(irods_path)));
        self.mutate(
            HttpMethod::Put,
            &Endpoint::collection(Resource::Genomes),
            Some(&body),
        )
    }

    /// Update a genome's organism and metadata. Only populated fields are
    /// sent, except `restricted` which is always sent.
    ///
    /// The service did not implement this endpoint at the time of writing.
    pub fn update_genome(&self, genome: &Genome) -> Result<CogeResponse, CogeError> {
        let body = GenomeBody::new(genome, None);
        self.mutate(
            HttpMethod::Post,
            &Endpoint::item(Resource::Genomes, genome.id()),
            Some(&body),
        )
    }

    /// Delete a genome.
    ///
    /// The service did not implement this endpoint at the time of writing.
    pub fn delete_genome(&self, id: GenomeId) -> Result<CogeResponse, CogeError> {
        self.mutate::<()>(HttpMethod::Delete, &Endpoint::item(Resource::Genomes, id), None)
    }
}

fn sequence(id: GenomeId) -> Endpoint {
    Endpoint::item(Resource::Genomes, id).join("sequence")
}
