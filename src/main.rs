// student-roster - a tiny student register that lives in students.json
//
// Loads the data file, prints how that went, then hands over to the menu.

use anyhow::Context;
use student_roster_lib::{
    console::{Console, LineConsole},
    core::{Menu, Registrar},
    store::{RosterFile, DEFAULT_DATA_FILE},
};

fn main() -> anyhow::Result<()> {
    // Quiet unless something goes wrong. RUST_LOG=debug for the chatty version.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let file = RosterFile::new(DEFAULT_DATA_FILE);
    let (registrar, status) = Registrar::open(file)
        .with_context(|| format!("Could not read {}", DEFAULT_DATA_FILE))?;

    let mut console = LineConsole::stdio();
    console.write_line(&registrar.file().status_line(&status))?;

    let mut menu = Menu::new(registrar, console);
    menu.run().context("Student roster stopped")?;

    Ok(())
}
