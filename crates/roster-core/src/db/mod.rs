//! Database operations and SQLite management for the roster schema.
//!
//! This module provides the low-level operations against the three-table
//! roster schema (`classes`, `students`, `registered_students`). It handles
//! connection setup (foreign-key enforcement, idempotent schema application)
//! and exposes specialized query interfaces for classes, students, and
//! registrations.

use std::path::Path;

use rusqlite::Connection;

use crate::error::{DatabaseResultExt, RegistrarError, Result};

pub mod class_queries;
pub mod roster_queries;
pub mod schema;
pub mod student_queries;

/// Database connection and operations handler.
///
/// Each instance owns exactly one SQLite connection. Operations acquire an
/// instance, run to completion, and drop it; nothing is pooled or shared
/// across operations. The engine serializes concurrent writers from other
/// processes.
pub struct Database {
    connection: Connection,
}

impl Database {
    /// Opens (or creates) the database file at `path` and prepares the
    /// session: foreign keys on, schema applied.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection =
            Connection::open(path.as_ref()).map_err(|e| RegistrarError::Connection {
                path: path.as_ref().to_path_buf(),
                source: e,
            })?;

        let db = Self { connection };
        db.initialize_session()?;
        Ok(db)
    }

    /// Reports the SQLite library version. Used as the connection test.
    pub fn sqlite_version(&self) -> Result<String> {
        self.connection
            .query_row("SELECT sqlite_version()", [], |row| row.get(0))
            .db_context("Failed to query the SQLite version")
    }
}
