//! Representations of data from the CoGe web service.
//!
//! ## How It Works
//!
//! CoGe responses are loosely structured: fields come and go between
//! versions of the service, and the same entity may be sent fully populated
//! (fetch) or with a handful of fields (search, or embedded in another entity).
//! Instead of deriving [serde::Deserialize], which would reject a document
//! missing any non-optional field, every entity implements [Hydrate], reading
//! each field through [Fields] only after checking it is present.
//!
//! The entities which share an id, name and description compose a [Record]
//! and expose it through [CogeObject]. [Feature] is not a record.

mod datastore;
mod experiment;
mod feature;
mod fields;
mod genome;
mod group;
mod notebook;
mod organism;
mod record;
mod response;

pub use datastore::*;
pub use experiment::*;
pub use feature::*;
pub use fields::Fields;
pub use genome::*;
pub use group::*;
pub use notebook::*;
pub use organism::*;
pub use record::*;
pub use response::*;

use serde_json::{Map, Value};

/// Construction of an entity from a JSON object, tolerating missing fields.
pub trait Hydrate: Sized {
    fn hydrate(fields: Fields<'_>) -> Self;

    fn from_object(object: &Map<String, Value>) -> Self {
        Self::hydrate(Fields::new(object))
    }
}
