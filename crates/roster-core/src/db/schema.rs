//! Connection session setup and schema application.

use crate::error::{DatabaseResultExt, Result};

impl super::Database {
    /// Enables foreign-key enforcement for this connection and applies the
    /// embedded schema. The schema only creates missing tables, so existing
    /// database files are left untouched.
    pub(super) fn initialize_session(&self) -> Result<()> {
        // Foreign keys are off by default in SQLite and must be enabled per
        // connection.
        self.connection
            .execute("PRAGMA foreign_keys = ON", [])
            .db_context("Failed to enable foreign keys")?;

        let schema_sql = include_str!("../../assets/schema.sql");
        self.connection
            .execute_batch(schema_sql)
            .db_context("Failed to initialize database schema")?;

        Ok(())
    }
}
