use super::coge::CogeClient;
use super::dispatch::Resource;
use crate::errors::CogeError;
use crate::models::Group;
use crate::types::GroupId;

impl CogeClient {
    pub fn search_groups(&self, term: &str) -> Result<Vec<Group>, CogeError> {
        self.search(Resource::Groups, term)
    }

    pub fn fetch_group(&self, id: GroupId) -> Result<Group, CogeError> {
        self.fetch(Resource::Groups, id)
    }
}
