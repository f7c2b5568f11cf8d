use thiserror::Error;

pub type Result<T> = std::result::Result<T, BoardError>;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("Board not found: {0}")]
    BoardNotFound(String),

    #[error("Column not found: {0}")]
    ColumnNotFound(String),

    #[error("Task not found: {0}")]
    TaskNotFound(String),

    #[error("Index {index} out of bounds for list of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("Field '{0}' must not be empty")]
    EmptyField(&'static str),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Invalid priority '{0}'. Valid priorities: low, medium, high")]
    InvalidPriority(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl BoardError {
    /// Whether this error reports a reference to an entity that does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            Self::BoardNotFound(_) | Self::ColumnNotFound(_) | Self::TaskNotFound(_)
        )
    }
}
