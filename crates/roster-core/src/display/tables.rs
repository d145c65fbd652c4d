//! Fixed-width table wrappers for the roster listings.
//!
//! Each wrapper prints a `| col | col |` header row, an 80-character rule,
//! and one `| … |` row per record. An empty collection prints just the
//! header and rule, matching the console contract.

use std::fmt;

use crate::models::{Class, RosterEntry, Student};

/// Width of the rule printed under every table header.
const RULE_WIDTH: usize = 80;

fn write_header(f: &mut fmt::Formatter<'_>, columns: &[&str]) -> fmt::Result {
    write!(f, "| ")?;
    for column in columns {
        write!(f, "{column} | ")?;
    }
    writeln!(f)?;
    writeln!(f, "{}", "-".repeat(RULE_WIDTH))
}

/// Newtype wrapper rendering a class listing as a table.
pub struct ClassTable<'a>(pub &'a [Class]);

impl fmt::Display for ClassTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &["id", "code", "title", "description", "max_students"])?;
        for class in self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} | {} |",
                class.id, class.code, class.title, class.description, class.max_students
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper rendering a student listing as a table.
pub struct StudentTable<'a>(pub &'a [Student]);

impl fmt::Display for StudentTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(f, &["id", "first_name", "last_name", "birth_date"])?;
        for student in self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                student.id, student.first_name, student.last_name, student.birth_date
            )?;
        }
        Ok(())
    }
}

/// Newtype wrapper rendering registration listings as a table.
pub struct RosterTable<'a>(pub &'a [RosterEntry]);

impl fmt::Display for RosterTable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_header(
            f,
            &["student_id", "student_full_name", "class_code", "class_title"],
        )?;
        for entry in self.0 {
            writeln!(
                f,
                "| {} | {} | {} | {} |",
                entry.student_id, entry.student_name, entry.class_code, entry.class_title
            )?;
        }
        Ok(())
    }
}
