use roster_core::{Registrar, RegistrarBuilder};
use tempfile::TempDir;

/// Helper function to create a test registrar backed by a scratch database
pub fn create_test_registrar() -> (TempDir, Registrar) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let registrar = RegistrarBuilder::new()
        .with_database_path(Some(&db_path))
        .build()
        .expect("Failed to create registrar");
    (temp_dir, registrar)
}
