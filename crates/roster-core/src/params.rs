//! Parameter structures for registrar operations.
//!
//! These structures carry already-validated input from the interactive layer
//! into the core without any framework-specific derives, so the same types
//! can serve the CLI menu, tests, and any future interface. The interactive
//! layer owns prompting and parsing; by the time one of these is built, its
//! fields are well-formed.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Parameters for creating a new class.
///
/// The id is assigned by the database and returned on the created record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewClass {
    /// Short course code, e.g. "CS101"
    pub code: String,
    /// Course title
    pub title: String,
    /// Free-text description
    pub description: String,
    /// Seat capacity
    pub max_students: u32,
}

/// Parameters for creating a new student.
///
/// The id is assigned by the database and returned on the created record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NewStudent {
    /// Given name
    pub first_name: String,
    /// Family name
    pub last_name: String,
    /// Calendar date of birth
    pub birth_date: Date,
}

/// One (student, class) pair, used both to enroll and to drop.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Enrollment {
    /// Primary key of the student
    pub student_id: i64,
    /// Primary key of the class
    pub class_id: i64,
}
