//! NewType for the root of the CoGe API, e.g. `https://genomevolution.org/coge/api/v1/`

use crate::errors::InvalidBaseUrl;
use aliri_braid::braid;

/// A [BaseUrl] is the base URL of a CoGe web service, e.g.
/// `https://genomevolution.org/coge/api/v1/`
#[braid(validator, serde)]
pub struct BaseUrl(String);

impl aliri_braid::Validator for BaseUrl {
    type Error = InvalidBaseUrl;

    fn validate(s: &str) -> Result<(), Self::Error> {
        if s.starts_with("http://") || s.starts_with("https://") {
            Ok(())
        } else {
            Err(InvalidBaseUrl::Protocol(s.to_string()))
        }
    }
}

impl BaseUrlRef {
    /// The URL without trailing slashes, ready for `/{resource}` to be appended.
    pub fn trimmed(&self) -> &str {
        self.as_str().trim_end_matches('/')
    }
}
