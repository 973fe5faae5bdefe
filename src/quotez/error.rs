use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuotezError {
    #[error("Invalid command")]
    InvalidCommand,

    #[error("Quote is too long")]
    QuoteTooLong,

    #[error("Quote was not modified")]
    NoOpTransformation,

    #[error("Quote has already been added previously")]
    DuplicateEntry,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, QuotezError>;
