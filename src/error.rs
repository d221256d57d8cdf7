use thiserror::Error;

pub type Result<T> = std::result::Result<T, SwimlaneError>;

#[derive(Debug, Error)]
pub enum SwimlaneError {
    #[error("Swimlane not found: {0}")]
    SwimlaneNotFound(String),

    #[error("Invalid swimlane ID format: {0}")]
    InvalidSwimlaneId(String),

    #[error("Swimlane title must not be empty")]
    EmptyTitle,

    #[error("Swimlane store not initialized")]
    StoreNotInitialized,

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Swimlane mutation did not complete: {0}")]
    TaskFailed(String),
}
