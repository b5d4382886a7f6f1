use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown cell: {id}")]
    UnknownCell { id: usize },

    #[error("Unsupported strategy: {0}")]
    UnsupportedStrategy(String),

    #[error("Invalid resource type: {0}")]
    InvalidResourceType(i32),

    #[error("Malformed input line {line:?}: {reason}")]
    MalformedInput { line: String, reason: String },

    #[error("Input stream closed")]
    UnexpectedEof,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
