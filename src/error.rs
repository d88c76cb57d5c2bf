// src/error.rs
use bson::spec::ElementType;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BoardError {
    #[error("MongoDB error: {0}")]
    Store(#[from] mongodb::error::Error),

    #[error("No board with title '{title}' found")]
    NotFound { title: String },

    #[error("Board '{title}' has no type field")]
    FieldMissing { title: String },

    #[error("board '{title}' has a non-string type field ({found:?})")]
    TypeNotString { title: String, found: ElementType },

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, BoardError>;
