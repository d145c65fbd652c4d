//! Selectors for addressing students by human-friendly keys.
//!
//! Every operation that accepts a human key resolves it to a primary key
//! through [`crate::db::Database::resolve_student`] before any mutation.
//! A selector matching zero rows or more than one row is an error, never a
//! silent multi-row write.

use std::fmt;

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Human-friendly key identifying a single student.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StudentSelector {
    /// Address a student by primary key
    Id(i64),
    /// Address a student by first and last name
    Name { first: String, last: String },
    /// Address a student by date of birth
    BirthDate(Date),
}

impl fmt::Display for StudentSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StudentSelector::Id(id) => write!(f, "id {id}"),
            StudentSelector::Name { first, last } => write!(f, "name '{first} {last}'"),
            StudentSelector::BirthDate(date) => write!(f, "birth date {date}"),
        }
    }
}

/// Single-field change applied to the one student a selector resolves to.
///
/// Exactly one field is updated per call. Reassigning the id carries an
/// explicit uniqueness check inside the update transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub enum StudentUpdate {
    Id(i64),
    FirstName(String),
    LastName(String),
    BirthDate(Date),
}

impl StudentUpdate {
    /// Column the change writes to.
    pub fn column(&self) -> &'static str {
        match self {
            StudentUpdate::Id(_) => "id",
            StudentUpdate::FirstName(_) => "first_name",
            StudentUpdate::LastName(_) => "last_name",
            StudentUpdate::BirthDate(_) => "birth_date",
        }
    }
}
