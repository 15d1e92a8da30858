//! Client library for the [CoGe](https://genomevolution.org/coge/) comparative
//! genomics web service.
//!
//! ```no_run
//! use coge::{CogeClient, CogeObject};
//! use coge::types::{BaseUrl, GenomeId};
//!
//! let url = BaseUrl::try_from("https://genomevolution.org/coge/api/v1/")?;
//! let coge = CogeClient::anonymous(url)?;
//! for genome in coge.search_genomes("Cicer arietinum", false)? {
//!     println!("{} {:?}", genome.id(), genome.name());
//! }
//! let fasta = coge.fetch_chromosome_sequence(GenomeId(16911), "Ca1")?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Adding, changing and deleting data, and listing the data store, require a
//! client created with a username and token. See [auth] and [config] for how
//! to get a token.

pub mod auth;
mod client;
pub mod config;
pub mod errors;
pub mod models;
pub mod types;

pub use client::coge::CogeClient;
pub use client::credentials::Credentials;
pub use client::dispatch::{escape_spaces, Resource};
pub use client::envelope::named_array;
pub use client::transport::{
    ApiRequest, ApiResponse, HttpMethod, RequestBody, ReqwestTransport, Transport,
};
pub use models::*;
