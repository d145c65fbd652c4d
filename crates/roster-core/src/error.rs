//! Error types for the roster library.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

use crate::models::StudentSelector;

/// Comprehensive error type for all registrar operations.
#[derive(Error, Debug)]
pub enum RegistrarError {
    /// Database query or statement errors
    #[error("Database error: {message}")]
    Database {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// The database file could not be opened
    #[error("Cannot open database at '{path}': {source}")]
    Connection {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },
    /// A foreign-key or uniqueness rule rejected a statement
    #[error("Constraint violation: {message}: {source}")]
    Constraint {
        message: String,
        #[source]
        source: rusqlite::Error,
    },
    /// Class lookup matched no rows
    #[error("Class {key} not found")]
    ClassNotFound { key: ClassKey },
    /// Student selector matched no rows
    #[error("No student matches {selector}")]
    StudentNotFound { selector: StudentSelector },
    /// Student selector matched more than one row
    #[error("{matches} students match {selector}; refine the search")]
    AmbiguousStudent {
        selector: StudentSelector,
        matches: usize,
    },
    /// Requested student id is already taken by another row
    #[error("Student id {id} is already in use")]
    DuplicateStudentId { id: i64 },
    /// Invalid input validation errors
    #[error("Invalid input for field '{field}': {reason}")]
    InvalidInput { field: String, reason: String },
    /// File system operation errors
    #[error("File system error at path '{path}': {source}")]
    FileSystem {
        path: PathBuf,
        source: std::io::Error,
    },
    /// XDG directory specification errors
    #[error("XDG directory error: {0}")]
    XdgDirectory(String),
}

/// Identifier a class lookup was attempted with, kept for error reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassKey {
    Id(i64),
    Code(String),
}

impl fmt::Display for ClassKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ClassKey::Id(id) => write!(f, "with id {id}"),
            ClassKey::Code(code) => write!(f, "with code '{code}'"),
        }
    }
}

impl RegistrarError {
    /// Wraps a rusqlite error, separating constraint rejections from other
    /// engine failures so callers can surface them distinctly.
    pub(crate) fn from_sqlite(message: impl Into<String>, source: rusqlite::Error) -> Self {
        if is_constraint_violation(&source) {
            RegistrarError::Constraint {
                message: message.into(),
                source,
            }
        } else {
            RegistrarError::Database {
                message: message.into(),
                source,
            }
        }
    }

    /// True for foreign-key and uniqueness rejections.
    pub fn is_constraint_violation(&self) -> bool {
        matches!(self, RegistrarError::Constraint { .. })
    }
}

fn is_constraint_violation(err: &rusqlite::Error) -> bool {
    matches!(
        err,
        rusqlite::Error::SqliteFailure(e, _) if e.code == rusqlite::ErrorCode::ConstraintViolation
    )
}

/// Extension trait for rusqlite Results to provide concise error mapping.
pub trait DatabaseResultExt<T> {
    /// Map database errors with a message.
    fn db_context(self, message: &str) -> Result<T>;
}

impl<T> DatabaseResultExt<T> for std::result::Result<T, rusqlite::Error> {
    fn db_context(self, message: &str) -> Result<T> {
        self.map_err(|e| RegistrarError::from_sqlite(message, e))
    }
}

/// Result type alias for registrar operations
pub type Result<T> = std::result::Result<T, RegistrarError>;
