//! Roster CLI Application
//!
//! Interactive, menu-driven front end for the roster school-management
//! tool. Parses the command line, opens the registrar, and hands control to
//! the menu loop.

mod args;
mod menu;
mod prompt;

use std::io;

use anyhow::{Context, Result};
use args::Args;
use clap::Parser;
use log::info;
use menu::Menu;
use prompt::Prompter;
use roster_core::RegistrarBuilder;

fn main() -> Result<()> {
    env_logger::init();

    let Args { database_file } = Args::parse();

    // The only fatal failure: the initial connection. Everything after this
    // point reports to the user and returns to the menu.
    let registrar = RegistrarBuilder::new()
        .with_database_path(database_file)
        .build()
        .context("Failed to open the roster database")?;

    info!("Roster started");

    let stdin = io::stdin();
    let prompter = Prompter::new(stdin.lock());
    Menu::new(registrar, prompter)
        .run()
        .context("Failed to read menu input")
}
