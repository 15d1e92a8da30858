use crate::errors::CogeError;
use crate::types::{BaseUrl, Username};
use std::fmt;

/// Where the CoGe web service is, and who is calling it.
///
/// Operations which add, change or delete data, or which read the data store,
/// require both a username and a token. When either is missing they fail
/// with [CogeError::MissingAuth] without sending a request.
#[derive(Clone)]
pub struct Credentials {
    base_url: BaseUrl,
    username: Option<Username>,
    token: Option<String>,
}

/// The `username` and `token` query parameters of an authenticated request.
pub(crate) struct AuthParams<'a> {
    pub username: &'a Username,
    pub token: &'a str,
}

impl Credentials {
    /// Credentials for public, read-only calls.
    pub fn anonymous(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            username: None,
            token: None,
        }
    }

    pub fn authenticated(base_url: BaseUrl, username: Username, token: impl Into<String>) -> Self {
        Self::new(base_url, Some(username), Some(token.into()))
    }

    /// An empty username or token counts as none.
    pub fn new(base_url: BaseUrl, username: Option<Username>, token: Option<String>) -> Self {
        Self {
            base_url,
            username: username.filter(|u| !u.as_str().is_empty()),
            token: token.filter(|t| !t.is_empty()),
        }
    }

    pub fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    pub fn username(&self) -> Option<&Username> {
        self.username.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.username.is_some() && self.token.is_some()
    }

    pub(crate) fn require(&self) -> Result<AuthParams<'_>, CogeError> {
        match (&self.username, &self.token) {
            (Some(username), Some(token)) => Ok(AuthParams { username, token }),
            _ => Err(CogeError::MissingAuth),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("base_url", &self.base_url)
            .field("username", &self.username)
            .field("token", &self.token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}
