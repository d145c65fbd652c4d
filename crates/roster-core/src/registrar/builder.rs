//! Builder for creating and configuring Registrar instances.

use std::path::{Path, PathBuf};

use super::Registrar;
use crate::{db::Database, error::{RegistrarError, Result}};

/// Builder for creating and configuring Registrar instances.
#[derive(Debug, Clone)]
pub struct RegistrarBuilder {
    database_path: Option<PathBuf>,
}

impl RegistrarBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            database_path: None,
        }
    }

    /// Sets a custom database file path.
    ///
    /// If not specified, uses XDG Base Directory specification:
    /// `$XDG_DATA_HOME/roster/roster.db` or `~/.local/share/roster/roster.db`
    pub fn with_database_path<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.database_path = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Builds the configured registrar instance, opening the database once
    /// to validate the path and apply the schema.
    ///
    /// # Errors
    ///
    /// Returns `RegistrarError::FileSystem` if the parent directory cannot
    /// be created, and `RegistrarError::Connection` if the database file
    /// cannot be opened.
    pub fn build(self) -> Result<Registrar> {
        let db_path = if let Some(path) = self.database_path {
            path
        } else {
            Self::default_database_path()?
        };

        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| RegistrarError::FileSystem {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let _db = Database::open(&db_path)?;

        Ok(Registrar::new(db_path))
    }

    /// Returns the default database path following XDG Base Directory
    /// specification.
    fn default_database_path() -> Result<PathBuf> {
        xdg::BaseDirectories::with_prefix("roster")
            .place_data_file("roster.db")
            .map_err(|e| RegistrarError::XdgDirectory(e.to_string()))
    }
}

impl Default for RegistrarBuilder {
    fn default() -> Self {
        Self::new()
    }
}
