//! High-level registrar API mapping menu actions onto the database.
//!
//! [`Registrar`] is the surface the interactive layer talks to. Each method
//! opens a fresh [`Database`](crate::db::Database), runs one operation to
//! completion, and releases the connection before returning, on success and
//! on error alike. Nothing is pooled, shared, or held open across user
//! interactions; concurrent processes are serialized by the engine itself.
//!
//! ## Submodules
//!
//! - [`builder`]: factory for creating [`Registrar`] instances
//! - [`class_ops`]: class CRUD and code/id lookups
//! - [`student_ops`]: student CRUD and selector resolution
//! - [`roster_ops`]: enrollment, withdrawal, and the joined listings

use std::path::PathBuf;

use crate::{db::Database, error::Result};

pub mod builder;
pub mod class_ops;
pub mod roster_ops;
pub mod student_ops;

pub use builder::RegistrarBuilder;

/// Main interface for roster operations.
#[derive(Debug)]
pub struct Registrar {
    pub(crate) db_path: PathBuf,
}

impl Registrar {
    /// Creates a new registrar for the given database path.
    pub(crate) fn new(db_path: PathBuf) -> Self {
        Self { db_path }
    }

    /// Opens the per-operation connection.
    pub(crate) fn database(&self) -> Result<Database> {
        Database::open(&self.db_path)
    }

    /// Connection test: opens a connection and reports the SQLite version.
    pub fn test_connection(&self) -> Result<String> {
        self.database()?.sqlite_version()
    }
}
