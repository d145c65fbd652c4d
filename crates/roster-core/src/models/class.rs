//! Class record definition.

use serde::{Deserialize, Serialize};

/// A class offering as stored in the `classes` table.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Class {
    /// Database-generated identifier, immutable once assigned
    pub id: i64,

    /// Short course code, e.g. "CS101" (unique by convention, not enforced)
    pub code: String,

    /// Course title
    pub title: String,

    /// Free-text description
    pub description: String,

    /// Seat capacity; not checked against actual registrations
    pub max_students: u32,
}
