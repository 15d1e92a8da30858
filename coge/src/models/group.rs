use super::record::coge_object;
use super::{Fields, Hydrate, Record};
use crate::types::{GroupId, UserId};

/// A user group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    pub record: Record<GroupId>,
    pub role: Option<String>,
    pub users: Vec<UserId>,
}

coge_object!(Group, GroupId);

impl Hydrate for Group {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            record: Record::hydrate(fields),
            role: fields.string("role"),
            users: fields.u32s("users").into_iter().map(UserId).collect(),
        }
    }
}
