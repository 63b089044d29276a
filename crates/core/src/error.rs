// Central Error Type for the Application

use thiserror::Error;

/// Application-level error type
///
/// Every adapter and facade operation reports failures through this one
/// vocabulary; transport-specific errors are translated before they get here.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Domain error: {0}")]
    Domain(#[from] crate::domain::DomainError),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(String),

    /// Remote service cannot be reached (fatal at startup)
    #[error("Connectivity error: {0}")]
    Connectivity(String),

    /// Remote service answered with a non-success status
    #[error("Remote service error ({status}): {body}")]
    RemoteService { status: u16, body: String },

    /// Response shape does not match the request
    #[error("Protocol error: {0}")]
    Protocol(String),

    #[error("Transport error: {0}")]
    Transport(String),

    /// A SQL statement was rejected inside an otherwise successful batch
    #[error("Statement failed: {message} ({stmt})")]
    Statement { stmt: String, message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Not implemented: {0}")]
    NotImplemented(String),
}

/// Result type alias using AppError
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Remote status code, if the failure came from the remote service
    pub fn status(&self) -> Option<u16> {
        match self {
            AppError::RemoteService { status, .. } => Some(*status),
            _ => None,
        }
    }
}

// Note: reqwest::Error conversion is handled in infra-griddb crate
// by translating into Transport / Protocol / Connectivity variants
