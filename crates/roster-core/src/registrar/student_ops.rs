//! Student operations for the Registrar.

use super::Registrar;
use crate::{
    error::Result,
    models::{Student, StudentSelector, StudentUpdate},
    params::NewStudent,
};

impl Registrar {
    /// Lists every student in storage order.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        self.database()?.list_students()
    }

    /// Creates a new student and returns it with the database-generated id.
    pub fn create_student(&self, params: &NewStudent) -> Result<Student> {
        let mut db = self.database()?;
        db.insert_student(params)
    }

    /// Retrieves a student by id.
    pub fn get_student(&self, id: i64) -> Result<Option<Student>> {
        self.database()?.get_student(id)
    }

    /// Resolves a selector to exactly one student id; zero or multiple
    /// matches are reported as errors.
    pub fn resolve_student(&self, selector: &StudentSelector) -> Result<i64> {
        self.database()?.resolve_student(selector)
    }

    /// Applies a single-field change to the one student the selector
    /// resolves to. Returns rows affected.
    pub fn update_student(
        &self,
        selector: &StudentSelector,
        update: &StudentUpdate,
    ) -> Result<usize> {
        let mut db = self.database()?;
        db.update_student(selector, update)
    }

    /// Deletes the one student the selector resolves to, together with
    /// their registrations, in a single transaction.
    pub fn delete_student(&self, selector: &StudentSelector) -> Result<()> {
        let mut db = self.database()?;
        db.delete_student(selector)
    }
}
