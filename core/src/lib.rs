// Rolodex Core - in-memory address book
//
// One sorted map of names to phone numbers, alive for the process
// lifetime. Nothing is persisted, nothing leaves the terminal.

pub mod book;
pub mod console;
pub mod session;

use thiserror::Error;

pub use book::{AddressBook, Entry};
pub use console::{Console, ScriptedConsole};
pub use session::{AddOutcome, AlterOutcome, RemoveOutcome, Session};

// ============================================================================
// ERROR TYPES
// ============================================================================

/// Non-fatal failure modes of the address book. Every variant except `Io`
/// is recovered locally with a user-facing message; `Io` means the console
/// itself is gone (EOF or a broken pipe) and unwinds back to the menu loop.
#[derive(Debug, Error)]
pub enum BookError {
    #[error("This is not a valid name")]
    InvalidInput,
    #[error("No matching entries for that name")]
    NoMatch,
    #[error("This entry already exists")]
    DuplicateEntry,
    #[error("Console read failed: {0}")]
    Io(#[from] std::io::Error),
}
