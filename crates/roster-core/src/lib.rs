//! Core library for the roster school-management application.
//!
//! This crate provides the data-access layer for managing classes, students,
//! and class registrations in an embedded SQLite database: connection
//! lifecycle, parameterized statements, transactional multi-statement
//! operations, and resolution of human-friendly identifiers into primary
//! keys.
//!
//! # Architecture
//!
//! - **Entity records** ([`models`]): plain data holders for classes,
//!   students, and roster rows, plus the selector types used to address
//!   students by human-friendly keys.
//! - **Database** ([`db`]): one SQLite connection per instance, foreign-key
//!   enforcement on, idempotent schema application on open.
//! - **Registrar** ([`registrar`]): the operation surface the interactive
//!   layer calls. Each operation opens a fresh connection, runs to
//!   completion, and releases it on every exit path.
//! - **Display** ([`display`]): fixed-width table wrappers for console
//!   output.
//!
//! # Quick Start
//!
//! ```rust
//! use roster_core::{params::NewClass, RegistrarBuilder};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let registrar = RegistrarBuilder::new()
//!     .with_database_path(Some("school.db"))
//!     .build()?;
//!
//! let class = registrar.create_class(&NewClass {
//!     code: "CS101".to_string(),
//!     title: "Intro to Computer Science".to_string(),
//!     description: "Fundamentals".to_string(),
//!     max_students: 30,
//! })?;
//! println!("created class with id = {}", class.id);
//!
//! for class in registrar.list_classes()? {
//!     println!("{}: {}", class.code, class.title);
//! }
//! # Ok(())
//! # }
//! ```

pub mod db;
pub mod display;
pub mod error;
pub mod models;
pub mod params;
pub mod registrar;

// Re-export commonly used types
pub use db::Database;
pub use display::{ClassTable, OperationStatus, RosterTable, StudentTable};
pub use error::{ClassKey, DatabaseResultExt, RegistrarError, Result};
pub use models::{Class, RosterEntry, Student, StudentSelector, StudentUpdate};
pub use params::{Enrollment, NewClass, NewStudent};
pub use registrar::{Registrar, RegistrarBuilder};
