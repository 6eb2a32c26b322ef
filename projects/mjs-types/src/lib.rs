use thiserror::Error;

/// mjs error definitions
///
/// The tokenizer and parser never fail; errors only arise at the boundary
/// where source files are located and read.
#[derive(Debug, Error)]
pub enum MjsError {
    #[error("IO error: {message}")]
    IoError { message: String },

    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    #[error("Internal error: {0}")]
    InternalError(String),
}

impl MjsError {
    pub fn io(message: impl Into<String>) -> Self {
        MjsError::IoError { message: message.into() }
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        MjsError::InvalidInput { message: message.into() }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        MjsError::InternalError(message.into())
    }
}

impl From<std::io::Error> for MjsError {
    fn from(error: std::io::Error) -> Self {
        Self::io(error.to_string())
    }
}

pub type Result<T> = std::result::Result<T, MjsError>;
