//! Getting a CoGe token, the predecessor to an authenticated [crate::CogeClient].
//!
//! CoGe accepts tokens issued by its OAuth provider (Agave) through the
//! client-credentials grant.

use crate::client::envelope;
use crate::client::transport::{ApiRequest, HttpMethod, RequestBody, Transport};
use crate::errors::CogeError;
use crate::models::{Fields, Hydrate};
use log::debug;
use reqwest::header::AUTHORIZATION;

/// Token issued by the OAuth provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccessToken {
    pub access_token: Option<String>,
    pub scope: Option<String>,
    pub token_type: Option<String>,
    /// Lifetime of the token in seconds.
    pub expires_in: Option<u64>,
}

impl Hydrate for AccessToken {
    fn hydrate(fields: Fields<'_>) -> Self {
        Self {
            access_token: fields.string("access_token"),
            scope: fields.string("scope"),
            token_type: fields.string("token_type"),
            expires_in: fields.u64("expires_in"),
        }
    }
}

/// An OAuth client id and the endpoint which exchanges it for a token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientCredentials {
    /// Sent as-is after `Basic ` in the `Authorization` header.
    pub client_id: String,
    pub token_url: String,
}

impl ClientCredentials {
    pub fn new(client_id: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            token_url: token_url.into(),
        }
    }

    /// Exchange the client id for a token.
    pub fn get_token(&self, transport: &dyn Transport) -> Result<AccessToken, CogeError> {
        let request = ApiRequest {
            method: HttpMethod::Post,
            url: self.token_url.clone(),
            headers: vec![(
                AUTHORIZATION.as_str().to_string(),
                format!("Basic {}", self.client_id),
            )],
            body: Some(RequestBody::Form(vec![(
                "grant_type".to_string(),
                "client_credentials".to_string(),
            )])),
        };
        debug!("POST {} (client credentials)", self.token_url);
        let res = transport.execute(request)?;
        let document = envelope::into_object(envelope::parse(res)?)?;
        Ok(AccessToken::from_object(&document))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::transport::ApiResponse;
    use std::cell::RefCell;

    struct TokenEndpoint {
        body: &'static str,
        seen: RefCell<Option<ApiRequest>>,
    }

    impl Transport for TokenEndpoint {
        fn execute(&self, request: ApiRequest) -> Result<ApiResponse, CogeError> {
            self.seen.replace(Some(request));
            Ok(ApiResponse::new(200, self.body))
        }
    }

    fn endpoint(body: &'static str) -> TokenEndpoint {
        TokenEndpoint {
            body,
            seen: RefCell::new(None),
        }
    }

    #[test]
    fn test_get_token() {
        let transport = endpoint(
            r#"{"scope": "PRODUCTION", "token_type": "bearer", "expires_in": 14400, "access_token": "4f1c"}"#,
        );
        let credentials = ClientCredentials::new("a2V5OnNlY3JldA==", "https://agave.iplantc.org/token");
        let token = credentials.get_token(&transport).unwrap();
        assert_eq!(token.access_token.as_deref(), Some("4f1c"));
        assert_eq!(token.scope.as_deref(), Some("PRODUCTION"));
        assert_eq!(token.token_type.as_deref(), Some("bearer"));
        assert_eq!(token.expires_in, Some(14400));

        let request = transport.seen.into_inner().unwrap();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.url, "https://agave.iplantc.org/token");
        assert_eq!(
            request.headers,
            vec![("authorization".to_string(), "Basic a2V5OnNlY3JldA==".to_string())]
        );
        assert_eq!(
            request.body,
            Some(RequestBody::Form(vec![(
                "grant_type".to_string(),
                "client_credentials".to_string()
            )]))
        );
    }

    #[test]
    fn test_partial_token() {
        let transport = endpoint(r#"{"access_token": "4f1c"}"#);
        let token = ClientCredentials::new("id", "https://example.org/token")
            .get_token(&transport)
            .unwrap();
        assert_eq!(token.access_token.as_deref(), Some("4f1c"));
        assert_eq!(token.expires_in, None);
    }

    #[test]
    fn test_error() {
        let transport = endpoint(r#"{"error": "invalid_client"}"#);
        let err = ClientCredentials::new("id", "https://example.org/token")
            .get_token(&transport)
            .unwrap_err();
        assert_eq!(err.service_message(), Some("invalid_client"));
    }
}
