//! Student record definition.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// A student as stored in the `students` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Student {
    /// Database-generated identifier
    pub id: i64,

    /// Given name
    pub first_name: String,

    /// Family name
    pub last_name: String,

    /// Calendar date of birth, persisted as ISO-8601 `YYYY-MM-DD` text
    pub birth_date: Date,
}

impl Student {
    /// "First Last", the form used in roster listings.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}
