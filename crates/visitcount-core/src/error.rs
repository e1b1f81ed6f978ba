//! Shared error type across visitcount crates.

use thiserror::Error;

/// Message returned to callers when the path is missing or empty.
pub const MISSING_PATH_MESSAGE: &str = "Missing path parameter";

/// Client-facing error codes (stable API).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClientCode {
    /// Caller supplied an empty or missing path.
    InvalidInput,
    /// The key-value store rejected or failed the update.
    StoreFailure,
    /// Anything else that went wrong while processing.
    Unexpected,
}

impl ClientCode {
    /// String representation used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            ClientCode::InvalidInput => "invalid_input",
            ClientCode::StoreFailure => "store_failure",
            ClientCode::Unexpected => "unexpected",
        }
    }

    /// HTTP-style status code for this class of failure.
    pub fn status_code(self) -> u16 {
        match self {
            ClientCode::InvalidInput => 400,
            ClientCode::StoreFailure | ClientCode::Unexpected => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, VisitCountError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum VisitCountError {
    #[error("{0}")]
    InvalidInput(String),
    #[error("{0}")]
    Store(String),
    #[error("{0}")]
    Unexpected(String),
    #[error("unsupported config version")]
    UnsupportedVersion,
}

impl VisitCountError {
    pub fn missing_path() -> Self {
        VisitCountError::InvalidInput(MISSING_PATH_MESSAGE.into())
    }

    /// Map internal error to a stable client-facing code.
    pub fn client_code(&self) -> ClientCode {
        match self {
            VisitCountError::InvalidInput(_) | VisitCountError::UnsupportedVersion => {
                ClientCode::InvalidInput
            }
            VisitCountError::Store(_) => ClientCode::StoreFailure,
            VisitCountError::Unexpected(_) => ClientCode::Unexpected,
        }
    }

    pub fn status_code(&self) -> u16 {
        self.client_code().status_code()
    }
}
