//! Error types for index entry I/O

use thiserror::Error;

/// Result type alias for index entry I/O
pub type IndexResult<T> = Result<T, IndexError>;

/// Errors that can occur while reading or writing index entries
#[derive(Error, Debug)]
pub enum IndexError {
    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("line {line}: {message}")]
    Deserialization { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl IndexError {
    pub(crate) fn at_line(line: usize, err: &serde_json::Error) -> Self {
        IndexError::Deserialization {
            line,
            message: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for IndexError {
    fn from(err: serde_json::Error) -> Self {
        if err.is_data() || err.is_syntax() || err.is_eof() {
            IndexError::at_line(err.line(), &err)
        } else {
            IndexError::Serialization(err.to_string())
        }
    }
}
