// Menu loop: collects line input and dispatches to the session flows.
// Generic over Console so the whole loop runs under a scripted console
// in tests.

use rolodex_core::session::format_entry;
use rolodex_core::{AddressBook, BookError, Console, Entry, Session};

const MENU: &str = "\nWhat would you like to do? (1,2,3,4,5,6,7)\n \
                    1.) Add an entry to the address book\n \
                    2.) Remove an entry from the address book\n \
                    3.) Alter an entry in the address book\n \
                    4.) Get the list in alphabetical order (by first name)\n \
                    5.) Get the list in alphabetical order (by last name)\n \
                    6.) Find an entry in the address book\n \
                    7.) Quit";

pub fn run<C: Console>(book: &mut AddressBook, console: &mut C) -> Result<(), BookError> {
    loop {
        let mut choice = console.prompt(MENU)?;
        while !matches!(choice.as_str(), "1" | "2" | "3" | "4" | "5" | "6" | "7") {
            choice = console.prompt("Please choose one of the options (1,2,3,4,5,6,7)")?;
        }

        match choice.as_str() {
            "1" => {
                let first_name = console.prompt("Please enter the first name")?;
                let last_name = console.prompt("Please enter the last name (optional)")?;
                let phone_number = console.prompt("Please enter the phone number (optional)")?;
                Session::new(book, console).add(&first_name, &last_name, &phone_number)?;
            }
            "2" => {
                let query = console.prompt("Please enter a name")?;
                Session::new(book, console).remove(&query)?;
            }
            "3" => {
                let query = console.prompt("Please enter a name")?;
                Session::new(book, console).alter(&query)?;
            }
            "4" => {
                if book.is_empty() {
                    console.say("The address book is currently empty");
                } else {
                    console.say("The address book organised by first name:");
                    for entry in book.sorted_by_first_name().values() {
                        console.say(&format_entry(entry));
                    }
                }
            }
            "5" => {
                if book.is_empty() {
                    console.say("The address book is currently empty");
                } else {
                    console.say("The address book organised by last name:");
                    for entry in book.sorted_by_last_name().values() {
                        console.say(&format_entry_last_first(entry));
                    }
                }
            }
            "6" => {
                let query = console.prompt("Please enter a name")?;
                Session::new(book, console).search(&query);
            }
            _ => {
                tracing::debug!("quit selected, {} entries discarded", book.len());
                return Ok(());
            }
        }
    }
}

/// The last-name view prints the last name first, mirroring its sort key.
fn format_entry_last_first(entry: &Entry) -> String {
    if entry.last_name.is_empty() {
        format!(
            "Name: {} / Phone number: {}",
            entry.first_name, entry.phone_number
        )
    } else {
        format!(
            "Last name: {} / First name: {} / Phone number: {}",
            entry.last_name, entry.first_name, entry.phone_number
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rolodex_core::ScriptedConsole;

    #[test]
    fn test_menu_add_list_quit() {
        let mut book = AddressBook::new();
        let mut console = ScriptedConsole::new([
            "1", "Alice", "Zane", "555-0101", // add
            "4", // list by first name
            "7", // quit
        ]);

        run(&mut book, &mut console).unwrap();

        assert_eq!(book.len(), 1);
        assert!(console.said("Alice Zane successfully added"));
        assert!(console.said("The address book organised by first name:"));
        assert!(console.said("First name: Alice / Last name: Zane / Phone number: 555-0101"));
    }

    #[test]
    fn test_menu_reprompts_on_unknown_choice() {
        let mut book = AddressBook::new();
        let mut console = ScriptedConsole::new(["9", "banana", "7"]);

        run(&mut book, &mut console).unwrap();
        assert!(console.said("Please choose one of the options (1,2,3,4,5,6,7)"));
    }

    #[test]
    fn test_menu_last_name_view_prints_last_first() {
        let mut book = AddressBook::new();
        book.insert("Bob", "Young", "1").unwrap();
        book.insert("Mo", "", "2").unwrap();

        let mut console = ScriptedConsole::new(["5", "7"]);
        run(&mut book, &mut console).unwrap();

        assert!(console.said("Last name: Young / First name: Bob / Phone number: 1"));
        assert!(console.said("Name: Mo / Phone number: 2"));
    }

    #[test]
    fn test_menu_list_on_empty_book() {
        let mut book = AddressBook::new();
        let mut console = ScriptedConsole::new(["4", "5", "7"]);

        run(&mut book, &mut console).unwrap();
        assert!(console.said("The address book is currently empty"));
    }
}
