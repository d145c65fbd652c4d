//! Student CRUD operations and selector resolution.

use jiff::civil::Date;
use rusqlite::{params, types::Type, Connection, OptionalExtension};

use crate::{
    error::{DatabaseResultExt, RegistrarError, Result},
    models::{Student, StudentSelector, StudentUpdate},
    params::NewStudent,
};

// SQL statements as const strings, bound positionally at execution time
const SELECT_STUDENTS_SQL: &str = "SELECT id, first_name, last_name, birth_date FROM students";
const INSERT_STUDENT_SQL: &str =
    "INSERT INTO students (first_name, last_name, birth_date) VALUES (?1, ?2, ?3)";
const SELECT_STUDENT_SQL: &str =
    "SELECT id, first_name, last_name, birth_date FROM students WHERE id = ?1";
const STUDENT_IDS_BY_ID_SQL: &str = "SELECT id FROM students WHERE id = ?1";
const STUDENT_IDS_BY_NAME_SQL: &str =
    "SELECT id FROM students WHERE first_name = ?1 AND last_name = ?2";
const STUDENT_IDS_BY_BIRTH_DATE_SQL: &str = "SELECT id FROM students WHERE birth_date = ?1";
const STUDENT_ID_TAKEN_SQL: &str = "SELECT EXISTS(SELECT 1 FROM students WHERE id = ?1)";
const DELETE_STUDENT_REGISTRATIONS_SQL: &str =
    "DELETE FROM registered_students WHERE student_id = ?1";
const DELETE_STUDENT_SQL: &str = "DELETE FROM students WHERE id = ?1";

/// Collects the student ids matching a selector and insists on exactly one.
///
/// This is the shared resolution step for every operation that addresses a
/// student by a human-friendly key: zero matches and multiple matches are
/// both errors, so a write can never land on an unintended row.
pub(crate) fn resolve_student_id(
    connection: &Connection,
    selector: &StudentSelector,
) -> Result<i64> {
    let ids = match selector {
        StudentSelector::Id(id) => collect_ids(connection, STUDENT_IDS_BY_ID_SQL, params![id])?,
        StudentSelector::Name { first, last } => {
            collect_ids(connection, STUDENT_IDS_BY_NAME_SQL, params![first, last])?
        }
        StudentSelector::BirthDate(date) => collect_ids(
            connection,
            STUDENT_IDS_BY_BIRTH_DATE_SQL,
            params![date.to_string()],
        )?,
    };

    match ids.len() {
        0 => Err(RegistrarError::StudentNotFound {
            selector: selector.clone(),
        }),
        1 => Ok(ids[0]),
        matches => Err(RegistrarError::AmbiguousStudent {
            selector: selector.clone(),
            matches,
        }),
    }
}

fn collect_ids<P: rusqlite::Params>(
    connection: &Connection,
    sql: &str,
    params: P,
) -> Result<Vec<i64>> {
    let mut stmt = connection
        .prepare(sql)
        .db_context("Failed to prepare student lookup")?;

    let ids = stmt
        .query_map(params, |row| row.get(0))
        .db_context("Failed to look up students")?
        .collect::<std::result::Result<Vec<i64>, _>>()
        .db_context("Failed to fetch student ids")?;

    Ok(ids)
}

impl super::Database {
    /// Helper function to construct a Student from a database row
    fn build_student_from_row(row: &rusqlite::Row) -> rusqlite::Result<Student> {
        Ok(Student {
            id: row.get(0)?,
            first_name: row.get(1)?,
            last_name: row.get(2)?,
            birth_date: row.get::<_, String>(3)?.parse::<Date>().map_err(|e| {
                rusqlite::Error::FromSqlConversionFailure(3, Type::Text, Box::new(e))
            })?,
        })
    }

    /// Lists every student in storage order. Birth dates round-trip as the
    /// exact ISO-8601 strings they were stored with.
    pub fn list_students(&self) -> Result<Vec<Student>> {
        let mut stmt = self
            .connection
            .prepare(SELECT_STUDENTS_SQL)
            .db_context("Failed to prepare student listing")?;

        let students = stmt
            .query_map([], Self::build_student_from_row)
            .db_context("Failed to query the students table")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch students")?;

        Ok(students)
    }

    /// Inserts a new student and returns it with the generated primary key
    /// filled in.
    pub fn insert_student(&mut self, new: &NewStudent) -> Result<Student> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        tx.execute(
            INSERT_STUDENT_SQL,
            params![new.first_name, new.last_name, new.birth_date.to_string()],
        )
        .db_context("Failed to insert into the students table")?;

        let id = tx.last_insert_rowid();

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(Student {
            id,
            first_name: new.first_name.clone(),
            last_name: new.last_name.clone(),
            birth_date: new.birth_date,
        })
    }

    /// Retrieves a student by id.
    pub fn get_student(&self, id: i64) -> Result<Option<Student>> {
        self.connection
            .query_row(SELECT_STUDENT_SQL, params![id], Self::build_student_from_row)
            .optional()
            .db_context("Failed to query the students table")
    }

    /// Resolves a selector to exactly one student id.
    pub fn resolve_student(&self, selector: &StudentSelector) -> Result<i64> {
        resolve_student_id(&self.connection, selector)
    }

    /// Applies a single-field change to the one student the selector
    /// resolves to. Resolution, the uniqueness check for id reassignment,
    /// and the write all happen inside one transaction.
    pub fn update_student(
        &mut self,
        selector: &StudentSelector,
        update: &StudentUpdate,
    ) -> Result<usize> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let id = resolve_student_id(&tx, selector)?;

        if let StudentUpdate::Id(new_id) = update {
            if *new_id != id {
                let taken: bool = tx
                    .query_row(STUDENT_ID_TAKEN_SQL, params![new_id], |row| row.get(0))
                    .db_context("Failed to check student id availability")?;
                if taken {
                    return Err(RegistrarError::DuplicateStudentId { id: *new_id });
                }
            }
        }

        // One column per call; the column name comes from a fixed enum, the
        // value is always bound as a parameter.
        let sql = format!("UPDATE students SET {} = ?1 WHERE id = ?2", update.column());
        let rows = match update {
            StudentUpdate::Id(value) => tx.execute(&sql, params![value, id]),
            StudentUpdate::FirstName(value) => tx.execute(&sql, params![value, id]),
            StudentUpdate::LastName(value) => tx.execute(&sql, params![value, id]),
            StudentUpdate::BirthDate(value) => tx.execute(&sql, params![value.to_string(), id]),
        }
        .db_context("Failed to update the students table")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(rows)
    }

    /// Deletes the one student the selector resolves to, removing their
    /// registration rows first so referential integrity holds throughout.
    /// Both deletes share one transaction; partial failure rolls back.
    pub fn delete_student(&mut self, selector: &StudentSelector) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let id = resolve_student_id(&tx, selector)?;

        // Registrations first: the student row is referenced until they are
        // gone.
        tx.execute(DELETE_STUDENT_REGISTRATIONS_SQL, params![id])
            .db_context("Failed to delete from the registered_students table")?;
        tx.execute(DELETE_STUDENT_SQL, params![id])
            .db_context("Failed to delete from the students table")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }
}
