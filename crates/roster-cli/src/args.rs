use std::path::PathBuf;

use clap::Parser;

/// Main command-line interface for the roster school-management tool
///
/// Roster is a menu-driven manager for classes, students, and class
/// registrations backed by a single SQLite database file. Starting the
/// binary opens the database and enters an interactive numbered menu; all
/// further interaction happens through menu choices and prompts.
#[derive(Parser)]
#[command(version, about, name = "roster")]
pub struct Args {
    /// Path to the SQLite database file. Defaults to
    /// $XDG_DATA_HOME/roster/roster.db
    #[arg(long)]
    pub database_file: Option<PathBuf>,
}
