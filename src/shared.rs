use thiserror::Error;

use crate::api::ApiError;
use crate::cards::CardError;
use crate::config::ConfigError;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("Invalid card: {0}")]
    Card(#[from] CardError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
