//! Read model for the joined registration listings.

use serde::{Deserialize, Serialize};

/// One row of the students × registered_students × classes join.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RosterEntry {
    /// Primary key of the enrolled student
    pub student_id: i64,

    /// Full "First Last" name as concatenated by the join
    pub student_name: String,

    /// Code of the class the student is enrolled in
    pub class_code: String,

    /// Title of the class the student is enrolled in
    pub class_title: String,
}
