//! Display wrappers for console output.
//!
//! Newtype wrappers over the domain records implement [`std::fmt::Display`]
//! to produce the fixed-width `| … |` tables the menu prints, keeping
//! presentation out of the models themselves. Operation feedback goes
//! through [`OperationStatus`], which owns the `!!!` warning prefix.

pub mod status;
pub mod tables;

// Re-export the wrapper types
pub use status::OperationStatus;
pub use tables::{ClassTable, RosterTable, StudentTable};
