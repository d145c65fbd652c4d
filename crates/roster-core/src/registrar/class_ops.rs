//! Class operations for the Registrar.

use super::Registrar;
use crate::{error::Result, models::Class, params::NewClass};

impl Registrar {
    /// Lists every class in storage order.
    pub fn list_classes(&self) -> Result<Vec<Class>> {
        self.database()?.list_classes()
    }

    /// Creates a new class and returns it with the database-generated id.
    pub fn create_class(&self, params: &NewClass) -> Result<Class> {
        let mut db = self.database()?;
        db.insert_class(params)
    }

    /// Retrieves a class by id, used by the update flow to offer
    /// keep-the-old-value semantics.
    pub fn get_class(&self, id: i64) -> Result<Option<Class>> {
        self.database()?.get_class(id)
    }

    /// Rewrites a class addressed by its id. Returns rows affected; zero
    /// means no class has that id.
    pub fn update_class(&self, class: &Class) -> Result<usize> {
        self.database()?.update_class(class)
    }

    /// Deletes a class by id. Returns rows affected; a class with active
    /// registrations is rejected by the foreign-key constraint.
    pub fn delete_class(&self, id: i64) -> Result<usize> {
        self.database()?.delete_class(id)
    }

    /// Resolves a class code to its primary key.
    pub fn class_id_by_code(&self, code: &str) -> Result<i64> {
        self.database()?.class_id_by_code(code)
    }

    /// Reverse lookup: class id to code.
    pub fn class_code_by_id(&self, id: i64) -> Result<String> {
        self.database()?.class_code_by_id(id)
    }
}
