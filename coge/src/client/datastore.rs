use super::coge::CogeClient;
use super::dispatch::{Access, Endpoint, Resource};
use crate::errors::CogeError;
use crate::models::{DataStoreList, Hydrate};

impl CogeClient {
    /// List a directory of the data store (iRODS), e.g.
    /// `/iplant/home/shared/Legume_Federation`.
    ///
    /// Requires authentication. A leading `/` is optional.
    pub fn list_data_store(&self, path: &str) -> Result<DataStoreList, CogeError> {
        let endpoint = Endpoint::collection(Resource::Irods)
            .join("list")
            .join(path.trim_start_matches('/'));
        let document = self.get_object(&endpoint, Access::Authenticated)?;
        Ok(DataStoreList::from_object(&document))
    }
}
