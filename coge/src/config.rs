//! Connection settings for a CoGe web service, saved as a RON file.
//!
//! ```ron
//! (
//!     base_url: Some("https://genomevolution.org/coge/api/v1/"),
//!     user: Some("sam"),
//!     client_id: Some("a2V5OnNlY3JldA=="),
//!     token_url: Some("https://agave.iplantc.org/token"),
//! )
//! ```
//!
//! The token fields are filled in by [CogeParameters::initialize_token].

use crate::auth::ClientCredentials;
use crate::client::coge::CogeClient;
use crate::client::credentials::Credentials;
use crate::client::transport::Transport;
use crate::errors::CogeError;
use crate::types::{BaseUrl, Username};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Serialize, Deserialize, Default, Debug, Clone, PartialEq, Eq)]
pub struct CogeParameters {
    pub base_url: Option<BaseUrl>,
    pub user: Option<Username>,
    pub client_id: Option<String>,
    pub token_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_scope: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_type: Option<String>,
    /// Seconds
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token_expiration: Option<u64>,
}

impl CogeParameters {
    /// Read parameters from a file. A file which does not exist is created
    /// with every parameter unset.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CogeError> {
        let path = path.as_ref();
        debug!("loading CoGe parameters from {}", path.display());
        Ok(confy::load_path(path)?)
    }

    pub fn store(&self, path: impl AsRef<Path>) -> Result<(), CogeError> {
        Ok(confy::store_path(path, self)?)
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }

    fn client_credentials(&self) -> Option<ClientCredentials> {
        match (&self.client_id, &self.token_url) {
            (Some(client_id), Some(token_url)) => {
                Some(ClientCredentials::new(client_id, token_url))
            }
            _ => None,
        }
    }

    /// Get a token using `client_id` and `token_url`. Does nothing if either
    /// is unset. Fields missing from the token response are left as they were.
    pub fn initialize_token(&mut self, transport: &dyn Transport) -> Result<(), CogeError> {
        let credentials = match self.client_credentials() {
            Some(c) => c,
            None => {
                debug!("client_id or token_url not set, not getting a token");
                return Ok(());
            }
        };
        let token = credentials.get_token(transport)?;
        if token.scope.is_some() {
            self.token_scope = token.scope;
        }
        if token.token_type.is_some() {
            self.token_type = token.token_type;
        }
        if token.expires_in.is_some() {
            self.token_expiration = token.expires_in;
        }
        if token.access_token.is_some() {
            info!("got a CoGe token from {}", credentials.token_url);
            self.token = token.access_token;
        }
        Ok(())
    }

    pub fn credentials(&self) -> Result<Credentials, CogeError> {
        let base_url = self
            .base_url
            .clone()
            .ok_or(CogeError::MissingParameter("base_url"))?;
        Ok(Credentials::new(base_url, self.user.clone(), self.token.clone()))
    }

    /// Create a client, authenticated if both `user` and `token` are set.
    pub fn into_client(self) -> Result<CogeClient, CogeError> {
        CogeClient::new(self.credentials()?)
    }
}
