//! Error taxonomy for the ranking engine.

use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The data source could not supply a batch. Never retried by the engine.
    #[error("Data unavailable: {message}")]
    DataUnavailable { message: String },
    #[error("Batch size must be strictly positive, got {size}.")]
    InvalidSize { size: usize },
    /// Another ranking is in flight on a shared controller.
    #[error("A ranking operation is already in flight.")]
    Busy,
    #[error("Failed to read config file at {path:?}.")]
    ReadConfig {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config file at {path:?}.")]
    ParseConfig {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("{message}")]
    Validation { message: String },
}

impl Error {
    pub fn data_unavailable(message: impl Into<String>) -> Self {
        Self::DataUnavailable {
            message: message.into(),
        }
    }
}
