//! Errors for this crate.

use serde_json::Value;

#[derive(thiserror::Error, Debug)]
pub enum InvalidBaseUrl {
    #[error("Given URL does not start with \"http://\" or \"https://\": {0}")]
    Protocol(String),
}

aliri_braid::from_infallible!(InvalidBaseUrl);

/// Errors representing failed interactions with the CoGe web service.
#[derive(thiserror::Error, Debug)]
pub enum CogeError {
    /// An operation which needs a username and token was attempted without them.
    /// Raised before any request is sent.
    #[error("username and token are required for this operation")]
    MissingAuth,

    /// The response envelope contained an `error` object.
    #[error("CoGe error: {message}")]
    Service {
        message: String,
        /// The `error` value exactly as the service sent it.
        payload: Value,
    },

    /// Error response whose body is not a CoGe error envelope.
    #[error("(HTTP {status}): {text}")]
    Http { status: u16, text: String },

    /// Error from the HTTP transport.
    #[error(transparent)]
    Raw(#[from] reqwest::Error),

    /// Response body could not be parsed as JSON.
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    /// Response body is JSON, but not a JSON object.
    #[error("expected a JSON object, got: {0}")]
    NotAnObject(String),

    #[error(transparent)]
    Query(#[from] serde_urlencoded::ser::Error),

    #[error(transparent)]
    Config(#[from] confy::ConfyError),

    /// A configuration value needed to build a client is not set.
    #[error("configuration parameter \"{0}\" is not set")]
    MissingParameter(&'static str),

    #[error(transparent)]
    InvalidBaseUrl(#[from] InvalidBaseUrl),
}

impl CogeError {
    /// Wrap the value of an envelope's `error` key.
    pub(crate) fn service(payload: Value) -> Self {
        let message = match &payload {
            Value::String(s) => s.clone(),
            Value::Object(o) => match o.get("message") {
                Some(Value::String(s)) => s.clone(),
                _ => payload.to_string(),
            },
            other => other.to_string(),
        };
        CogeError::Service { message, payload }
    }

    /// The service-supplied message, if this is a [CogeError::Service].
    pub fn service_message(&self) -> Option<&str> {
        match self {
            CogeError::Service { message, .. } => Some(message),
            _ => None,
        }
    }
}
