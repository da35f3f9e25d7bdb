use serde::Serialize;
use thiserror::Error;

/// One kind per failing validation stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ErrorKind {
    EmptyPath,
    TooLong,
    NullByte,
    Traversal,
    ShellInjection,
    InvalidFormat,
    NotAbsolute,
    BasenameNotAllowed,
    NotFound,
    NotExecutable,
}

impl ErrorKind {
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::EmptyPath => "EmptyPath",
            ErrorKind::TooLong => "TooLong",
            ErrorKind::NullByte => "NullByte",
            ErrorKind::Traversal => "Traversal",
            ErrorKind::ShellInjection => "ShellInjection",
            ErrorKind::InvalidFormat => "InvalidFormat",
            ErrorKind::NotAbsolute => "NotAbsolute",
            ErrorKind::BasenameNotAllowed => "BasenameNotAllowed",
            ErrorKind::NotFound => "NotFound",
            ErrorKind::NotExecutable => "NotExecutable",
        }
    }

    /// Rejected before the path was ever handed to the filesystem.
    pub fn is_lexical(&self) -> bool {
        !matches!(self, ErrorKind::NotFound | ErrorKind::NotExecutable)
    }
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ValidationError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self { kind, message: message.into() }
    }

    pub fn code(&self) -> &'static str {
        self.kind.code()
    }
}

pub type ValidationResult<T> = Result<T, ValidationError>;
