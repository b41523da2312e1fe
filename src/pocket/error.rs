use thiserror::Error;

#[derive(Error, Debug)]
pub enum PocketError {
    /// A snippet draft is missing a required field. Nothing was stored.
    #[error("Invalid snippet: {0}")]
    Validation(String),

    /// The storage slot holds data that cannot be read back as a collection.
    #[error("Stored snippets are unreadable: {0}")]
    CorruptState(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),

    #[error("{0}")]
    Api(String),
}

pub type Result<T> = std::result::Result<T, PocketError>;
