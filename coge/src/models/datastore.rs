use super::fields::value_to_text;
use super::{Fields, Hydrate};
use std::collections::BTreeMap;

/// A listing of a directory in the CoGe data store (iRODS).
///
/// Items have no fixed schema; typical keys are `name`, `path`, `type` and `order`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DataStoreList {
    pub path: Option<String>,
    pub items: Vec<BTreeMap<String, String>>,
}

impl Hydrate for DataStoreList {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            path: fields.string("path"),
            items: fields
                .objects("items")
                .map(|item| {
                    item.entries()
                        .map(|(k, v)| (k.clone(), value_to_text(v)))
                        .collect::<BTreeMap<_, _>>()
                })
                .collect(),
        }
    }
}
