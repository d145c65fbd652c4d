//! Registration management: enrollment, withdrawal, and the joined listings.

use jiff::Zoned;
use rusqlite::params;

use super::student_queries::resolve_student_id;
use crate::{
    error::{ClassKey, DatabaseResultExt, RegistrarError, Result},
    models::{RosterEntry, StudentSelector},
};

// SQL statements as const strings, bound positionally at execution time
const STUDENT_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM students WHERE id = ?1)";
const CLASS_EXISTS_SQL: &str = "SELECT EXISTS(SELECT 1 FROM classes WHERE id = ?1)";
const INSERT_REGISTRATION_SQL: &str =
    "INSERT INTO registered_students (class_id, student_id, signup_date) VALUES (?1, ?2, ?3)";
const DELETE_REGISTRATION_SQL: &str =
    "DELETE FROM registered_students WHERE student_id = ?1 AND class_id = ?2";

const ROSTER_SQL: &str = "\
    SELECT students.id, students.first_name || ' ' || students.last_name, \
           classes.code, classes.title \
    FROM students \
    INNER JOIN registered_students ON students.id = registered_students.student_id \
    INNER JOIN classes ON classes.id = registered_students.class_id \
    ORDER BY students.last_name, students.first_name, classes.code";

const CLASS_ROSTER_SQL: &str = "\
    SELECT students.id, students.first_name || ' ' || students.last_name, \
           classes.code, classes.title \
    FROM students \
    INNER JOIN registered_students ON students.id = registered_students.student_id \
    INNER JOIN classes ON classes.id = registered_students.class_id \
    WHERE classes.code = ?1 \
    ORDER BY students.last_name, students.first_name, classes.code";

const STUDENT_SCHEDULE_SQL: &str = "\
    SELECT students.id, students.first_name || ' ' || students.last_name, \
           classes.code, classes.title \
    FROM students \
    INNER JOIN registered_students ON students.id = registered_students.student_id \
    INNER JOIN classes ON classes.id = registered_students.class_id \
    WHERE students.id = ?1 \
    ORDER BY classes.code";

impl super::Database {
    /// Helper function to construct a RosterEntry from a joined row
    fn build_roster_entry(row: &rusqlite::Row) -> rusqlite::Result<RosterEntry> {
        Ok(RosterEntry {
            student_id: row.get(0)?,
            student_name: row.get(1)?,
            class_code: row.get(2)?,
            class_title: row.get(3)?,
        })
    }

    fn collect_roster<P: rusqlite::Params>(&self, sql: &str, params: P) -> Result<Vec<RosterEntry>> {
        let mut stmt = self
            .connection
            .prepare(sql)
            .db_context("Failed to prepare registration listing")?;

        let entries = stmt
            .query_map(params, Self::build_roster_entry)
            .db_context("Failed to query the registered_students table")?
            .collect::<std::result::Result<Vec<_>, _>>()
            .db_context("Failed to fetch registrations")?;

        Ok(entries)
    }

    /// Enrolls a student in a class, stamping today's date as the signup
    /// date. Both ids are checked up front so the invalid side is reported
    /// precisely; the foreign-key constraints back the same invariant.
    pub fn enroll_student(&mut self, student_id: i64, class_id: i64) -> Result<()> {
        let tx = self
            .connection
            .transaction()
            .db_context("Failed to begin transaction")?;

        let student_exists: bool = tx
            .query_row(STUDENT_EXISTS_SQL, params![student_id], |row| row.get(0))
            .db_context("Failed to check student existence")?;
        if !student_exists {
            return Err(RegistrarError::StudentNotFound {
                selector: StudentSelector::Id(student_id),
            });
        }

        let class_exists: bool = tx
            .query_row(CLASS_EXISTS_SQL, params![class_id], |row| row.get(0))
            .db_context("Failed to check class existence")?;
        if !class_exists {
            return Err(RegistrarError::ClassNotFound {
                key: ClassKey::Id(class_id),
            });
        }

        let today = Zoned::now().date();
        tx.execute(
            INSERT_REGISTRATION_SQL,
            params![class_id, student_id, today.to_string()],
        )
        .db_context("Failed to insert into the registered_students table")?;

        tx.commit().db_context("Failed to commit transaction")?;

        Ok(())
    }

    /// Removes one registration row. Returns the number of rows affected;
    /// zero means the student was not enrolled in that class and is a
    /// warning at the caller, not an error.
    pub fn withdraw_student(&self, student_id: i64, class_id: i64) -> Result<usize> {
        self.connection
            .execute(DELETE_REGISTRATION_SQL, params![student_id, class_id])
            .db_context("Failed to delete from the registered_students table")
    }

    /// Every registration joined with its student and class, ordered by
    /// last name, first name, class code.
    pub fn roster(&self) -> Result<Vec<RosterEntry>> {
        self.collect_roster(ROSTER_SQL, [])
    }

    /// The roster restricted to one class code.
    pub fn class_roster(&self, class_code: &str) -> Result<Vec<RosterEntry>> {
        self.collect_roster(CLASS_ROSTER_SQL, params![class_code])
    }

    /// Every class the selected student is enrolled in, ordered by class
    /// code. The selector is resolved to a primary key first, so homonyms
    /// fail loudly instead of merging schedules.
    pub fn student_schedule(&self, selector: &StudentSelector) -> Result<Vec<RosterEntry>> {
        let id = resolve_student_id(&self.connection, selector)?;
        self.collect_roster(STUDENT_SCHEDULE_SQL, params![id])
    }
}
