//! Error handling for Posha.
//! One error enum per subsystem, `thiserror` only, rolled up into `PoshaError`.

pub mod config_error;
pub mod storage_error;

pub use config_error::ConfigError;
pub use storage_error::StorageError;

/// Top-level error type for every fallible Posha operation.
#[derive(Debug, thiserror::Error)]
pub enum PoshaError {
    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("serialization error: {message}")]
    Serialization { message: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("item not found: {id}")]
    ItemNotFound { id: String },
}

impl From<serde_json::Error> for PoshaError {
    fn from(err: serde_json::Error) -> Self {
        PoshaError::Serialization {
            message: err.to_string(),
        }
    }
}

pub type PoshaResult<T> = Result<T, PoshaError>;
