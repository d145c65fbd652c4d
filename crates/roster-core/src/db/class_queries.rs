//! Class CRUD operations and point lookups.

use rusqlite::{params, OptionalExtension};

use crate::{
    error::{ClassKey, DatabaseResultExt, RegistrarError, Result},
    models::Class,
    params::NewClass,
};

// SQL statements as const strings, bound positionally at execution time
const SELECT_CLASSES_SQL: &str = "SELECT id, code, title, description, max_students FROM classes";
const INSERT_CLASS_SQL: &str =
    "INSERT INTO classes (code, title, description, max_students) VALUES (?1, ?2, ?3, ?4)";
const SELECT_CLASS_SQL: &str =
    "SELECT id, code, title, description, max_students FROM classes WHERE id = ?1";
const UPDATE_CLASS_SQL: &str =
    "UPDATE classes SET code = ?1, title = ?2, description = ?3, max_students = ?4 WHERE id = ?5";
const DELETE_CLASS_SQL: &str = "DELETE FROM classes WHERE id = ?1";
const CLASS_ID_BY_CODE_SQL: &str = "SELECT id FROM classes WHERE code = ?1";
const CLASS_CODE_BY_ID_SQL: &str = "SELECT code FROM classes WHERE id = ?1";

impl super::Database {
    /// Helper function to construct a Class from a database row
    fn build_class_from_row(row: &rusqlite::Row) -> rusqlite::Result<Class> {
        Ok(Class {
            id: row.get(0)?,
            code: row.get(1)?,
            title: row.get(2)?,
            description: row.get(3)?,
            max_students: row.get(4)?,
        })
    }

    /// Lists every class in storage order.
    pub fn list_classes(&self) -> Result<Vec<Class>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_CLASSES_SQL)
            .db_context("Failed to prepare class listing")?;

        let classes = stmt
            .query_map([], Self::build_class_from_row)
            .db_context("Failed to query the classes table")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch classes")?;

        Ok(classes)
    }

    /// Inserts a new class and returns it with the generated primary key
    /// filled in.
    pub fn insert_class(&mut self, new: &NewClass) -> Result<Class> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_CLASS_SQL,
            params![new.code, new.title, new.description, new.max_students],
        )
        .db_context("Failed to insert into the classes table")?;

        let id = tx.last_insert_rowid();

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Class {
            id,
            code: new.code.clone(),
            title: new.title.clone(),
            description: new.description.clone(),
            max_students: new.max_students,
        })
    }

    /// Retrieves a class by id.
    pub fn get_class(&self, id: i64) -> Result<Option<Class>> {
        self.connection
            .query_row(SELECT_CLASS_SQL, params![id], Self::build_class_from_row)
            .optional()
            .db_context("Failed to query the classes table")
    }

    /// Rewrites all mutable columns of the class addressed by `class.id`.
    /// Returns the number of rows affected; zero means no class has that id
    /// and the caller reports it as a warning, not an error.
    pub fn update_class(&self, class: &Class) -> Result<usize> {
        self.connection
            .execute(
                UPDATE_CLASS_SQL,
                params![
                    class.code,
                    class.title,
                    class.description,
                    class.max_students,
                    class.id
                ],
            )
            .db_context("Failed to update the classes table")
    }

    /// Deletes a class by id. Returns the number of rows affected; zero is a
    /// warning at the caller. A class with active registrations is kept and
    /// the foreign-key rejection surfaces as a constraint violation.
    pub fn delete_class(&self, id: i64) -> Result<usize> {
        self.connection
            .execute(DELETE_CLASS_SQL, params![id])
            .db_context("Failed to delete from the classes table")
    }

    /// Resolves a class code to its primary key.
    pub fn class_id_by_code(&self, code: &str) -> Result<i64> {
        self.connection
            .query_row(CLASS_ID_BY_CODE_SQL, params![code], |row| row.get(0))
            .optional()
            .db_context("Failed to look up class by code")?
            .ok_or_else(|| RegistrarError::ClassNotFound {
                key: ClassKey::Code(code.to_string()),
            })
    }

    /// Reverse lookup: class id to code.
    pub fn class_code_by_id(&self, id: i64) -> Result<String> {
        self.connection
            .query_row(CLASS_CODE_BY_ID_SQL, params![id], |row| row.get(0))
            .optional()
            .db_context("Failed to look up class by id")?
            .ok_or(RegistrarError::ClassNotFound {
                key: ClassKey::Id(id),
            })
    }
}
