//! Client error types
//!
//! Two classes survive on the client side: transport failures (network,
//! non-JSON body) and server-reported errors, reduced to their first
//! message.

use thiserror::Error;

/// Client-side errors
#[derive(Debug, Clone, Error)]
pub enum ClientError {
    /// Network unreachable, timeout, or an unparseable body
    #[error("Transport error: {0}")]
    Transport(String),

    /// The first message of the response's errors list. Subsequent
    /// messages are dropped.
    #[error("{0}")]
    Server(String),
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Transport(err.to_string())
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
