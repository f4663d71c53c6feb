use thiserror::Error;

#[derive(Error, Debug)]
pub enum LatchkeyError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    /// A persisted value exists but cannot be decoded, as text or as JSON.
    /// Run `doctor --reset` to recover.
    #[error("Storage corrupted under key '{key}': {source}")]
    StorageCorrupted {
        key: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LatchkeyError>;
