pub(crate) mod coge;
pub(crate) mod credentials;
pub(crate) mod dispatch;
pub(crate) mod envelope;
pub(crate) mod transport;

mod datastore;
mod experiment;
mod feature;
mod genome;
mod group;
mod notebook;
mod organism;
