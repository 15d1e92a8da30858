use super::coge::CogeClient;
use super::dispatch::Resource;
use crate::errors::CogeError;
use crate::models::Experiment;
use crate::types::ExperimentId;

impl CogeClient {
    pub fn search_experiments(&self, term: &str) -> Result<Vec<Experiment>, CogeError> {
        self.search(Resource::Experiments, term)
    }

    pub fn fetch_experiment(&self, id: ExperimentId) -> Result<Experiment, CogeError> {
        self.fetch(Resource::Experiments, id)
    }
}
