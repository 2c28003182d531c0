// rolodex - interactive console address book
//
// Menu-driven and in-memory only: entries live until the process exits.

mod menu;
mod term;

use anyhow::Result;
use clap::Parser;
use colored::*;
use rolodex_core::{AddressBook, BookError};

#[derive(Parser)]
#[command(name = "rolodex")]
#[command(about = "Rolodex - interactive console address book", long_about = None)]
#[command(version)]
struct Cli {}

fn main() -> Result<()> {
    // Logs go to stderr so they never interleave with the menu.
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let _cli = Cli::parse();

    println!("{}", "Rolodex".bold());
    println!("{}", "Nothing is saved to disk; entries last for this session only.".dimmed());

    let mut book = AddressBook::new();
    let mut console = term::TermConsole::new();

    match menu::run(&mut book, &mut console) {
        Ok(()) => Ok(()),
        // Closed stdin is a normal way to leave the program.
        Err(BookError::Io(err)) if err.kind() == std::io::ErrorKind::UnexpectedEof => Ok(()),
        Err(err) => Err(err.into()),
    }
}
