use thiserror::Error;

use super::types::Endpoint;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Could not build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("Request to /{endpoint} failed: {source}")]
    Transport {
        endpoint: Endpoint,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not decode /{endpoint} response: {message}")]
    Decode { endpoint: Endpoint, message: String },

    #[error("Server rejected /{endpoint} ({status}): {message}")]
    Rejected {
        endpoint: Endpoint,
        status: u16,
        message: String,
    },

    #[error("Unexpected /{endpoint} response: {body}")]
    UnexpectedResponse { endpoint: Endpoint, body: String },
}
