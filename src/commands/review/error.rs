//! Error types for review commands.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReviewCommandError {
    #[error(
        "No server endpoint configured. Pass --server, set REVIEWKIT_SERVER_ENDPOINT, \
         or set api.server_endpoint in the config file"
    )]
    MissingEndpoint,

    #[error("Failed to read cookie file: {0}")]
    CookieError(#[from] std::io::Error),
}

pub type Result<T> = anyhow::Result<T>;
