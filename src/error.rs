//! Error types for retag

use std::fmt;
use thiserror::Error;

/// Error kind for detailed categorization
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// A declared mapping namespace lacks a prefix
    NamespaceMissingPrefix { uri: String },
    /// A fragment handed to the wrapping utility is not an element
    MalformedFragment { index: usize },
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NamespaceMissingPrefix { uri } => {
                write!(f, "namespace declaration for \"{uri}\" is missing a prefix")
            }
            Self::MalformedFragment { index } => {
                write!(f, "fragment at index {index} is not an element")
            }
        }
    }
}

/// Main error type for retag
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub struct Error {
    kind: ErrorKind,
    message: String,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        let message = kind.to_string();
        Self { kind, message }
    }

    pub fn with_message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "error: {}", self.message)
    }
}

/// Result type alias for retag
pub type Result<T> = std::result::Result<T, Error>;
