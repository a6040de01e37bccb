//! Error types for wallet operations

use thiserror::Error;

/// Errors returned by [`WalletClient`](crate::WalletClient)
#[derive(Debug, Error)]
pub enum WalletError {
    /// Caller input rejected before any request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// The provider answered with a non-success HTTP status
    #[error("Provider error: HTTP {status} - {body}")]
    Provider { status: u16, body: String },

    /// The request never produced an HTTP response
    #[error("Transport error: {0}")]
    Transport(String),

    /// Success status, but the body is not what the operation expects
    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Coarse classification of a [`WalletError`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Provider,
    ResponseShape,
    Config,
}

impl WalletError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::Validation(_) => ErrorKind::Validation,
            WalletError::Provider { .. } | WalletError::Transport(_) => ErrorKind::Provider,
            WalletError::ResponseShape(_) => ErrorKind::ResponseShape,
            WalletError::Config(_) => ErrorKind::Config,
        }
    }

    /// HTTP status carried by a provider error, if any
    pub fn status(&self) -> Option<u16> {
        match self {
            WalletError::Provider { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub(crate) fn validation(message: impl Into<String>) -> Self {
        WalletError::Validation(message.into())
    }

    pub(crate) fn shape(message: impl Into<String>) -> Self {
        WalletError::ResponseShape(message.into())
    }
}

impl From<reqwest::Error> for WalletError {
    fn from(err: reqwest::Error) -> Self {
        WalletError::Transport(err.to_string())
    }
}

/// Wallet result type
pub type WalletResult<T> = std::result::Result<T, WalletError>;
