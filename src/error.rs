use reqwest::StatusCode;
use serde_json::{Map, Value};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// Network, TLS, timeout or body-read failure from the transport.
    #[error("HTTP request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to encode request: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("failed to decode response: {0}")]
    Decode(#[source] serde_json::Error),

    /// Non-200 response with a well-formed error body.
    #[error("error: {message}, details: {}", render_details(.errors))]
    Api {
        status: StatusCode,
        message: String,
        errors: Map<String, Value>,
    },

    /// Non-200 response whose body is not an error object.
    #[error("error parsing response: {source}")]
    ErrorBody {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// HTTP status of a non-200 response, if that is what failed.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Api { status, .. } | Error::ErrorBody { status, .. } => Some(*status),
            Error::Transport(e) => e.status(),
            _ => None,
        }
    }

    pub fn details(&self) -> Option<&Map<String, Value>> {
        match self {
            Error::Api { errors, .. } => Some(errors),
            _ => None,
        }
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, Error::Transport(e) if e.is_timeout())
    }
}

fn render_details(errors: &Map<String, Value>) -> String {
    Value::Object(errors.clone()).to_string()
}
