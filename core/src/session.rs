// Interactive add/remove/alter flows.
//
// Remove and alter share one resolution protocol: an exact key is trusted
// only when the matched entry has a last name, because a first-name-only
// key can share its first name with a different entry that does have one.
// Every other query goes through search followed by a pick loop, where the
// user types an exact composite key or "Q" to bail back to the menu.

use crate::book::{compose_key, normalize_name, AddressBook, Entry};
use crate::console::Console;
use crate::BookError;
use std::collections::BTreeMap;

const NO_MATCH: &str = "No matching entries for that name";
const SELECT_HELP: &str = "Please select an entry by typing \"first last\" \
                           (or \"first\" if there's no last name), \
                           or type \"Q\" to quit and return to the menu";
const EDIT_MENU: &str = "What would you like to do? (1,2,3,4)\n \
                         1.) Alter the first name\n \
                         2.) Alter the last name\n \
                         3.) Alter the phone number\n \
                         4.) Quit and save the new edits";

#[derive(Debug, PartialEq, Eq)]
pub enum AddOutcome {
    Added(String),
    Duplicate(String),
}

#[derive(Debug, PartialEq, Eq)]
pub enum RemoveOutcome {
    Removed(String),
    NoMatch,
    Aborted,
}

#[derive(Debug, PartialEq, Eq)]
pub enum AlterOutcome {
    /// Edit committed; holds the (possibly re-keyed) composite key.
    Committed(String),
    /// The requested rename collided with another entry; whole edit dropped.
    Duplicate,
    NoMatch,
    Aborted,
}

/// One user-facing pass over the address book. Borrows the store and a
/// console for the duration of a single menu action.
pub struct Session<'a, C: Console> {
    book: &'a mut AddressBook,
    console: &'a mut C,
}

impl<'a, C: Console> Session<'a, C> {
    pub fn new(book: &'a mut AddressBook, console: &'a mut C) -> Self {
        Self { book, console }
    }

    /// Add an entry, re-prompting until the first name is non-blank.
    pub fn add(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<AddOutcome, BookError> {
        let mut first_name = normalize_name(first_name);
        while first_name.is_empty() {
            first_name = normalize_name(&self.console.prompt("Please enter a valid first name")?);
        }
        let last_name = normalize_name(last_name);

        let key = compose_key(&first_name, &last_name);
        if self.book.contains(&key) {
            self.console.say("This entry already exists");
            return Ok(AddOutcome::Duplicate(key));
        }

        let key = self.book.insert(&first_name, &last_name, phone_number)?;
        self.console.say(&format!("{} successfully added", key));
        Ok(AddOutcome::Added(key))
    }

    /// Remove an entry by query, disambiguating interactively when the
    /// query does not pin down a single entry.
    pub fn remove(&mut self, query: &str) -> Result<RemoveOutcome, BookError> {
        if normalize_name(query).is_empty() || self.book.is_empty() {
            self.console.say(NO_MATCH);
            return Ok(RemoveOutcome::NoMatch);
        }

        if self.exact_hit(query) {
            self.book.delete(query);
            self.console.say("Entry successfully removed");
            return Ok(RemoveOutcome::Removed(query.to_string()));
        }

        let matches = self.book.find(query);
        if matches.is_empty() {
            self.console.say(NO_MATCH);
            return Ok(RemoveOutcome::NoMatch);
        }
        self.print_matches(&matches);

        loop {
            let choice = self.console.prompt(SELECT_HELP)?;
            if choice == "Q" {
                return Ok(RemoveOutcome::Aborted);
            }
            if self.book.delete(&choice) {
                self.console.say("Entry successfully removed");
                return Ok(RemoveOutcome::Removed(choice));
            }
        }
    }

    /// Alter an entry: resolve the target the same way `remove` does, then
    /// run the edit sub-loop until the user commits.
    pub fn alter(&mut self, query: &str) -> Result<AlterOutcome, BookError> {
        if normalize_name(query).is_empty() || self.book.is_empty() {
            self.console.say(NO_MATCH);
            return Ok(AlterOutcome::NoMatch);
        }

        let target = if self.exact_hit(query) {
            query.to_string()
        } else {
            let matches = self.book.find(query);
            if matches.is_empty() {
                self.console.say(NO_MATCH);
                return Ok(AlterOutcome::NoMatch);
            }
            self.print_matches(&matches);

            loop {
                let choice = self.console.prompt(SELECT_HELP)?;
                if choice == "Q" {
                    return Ok(AlterOutcome::Aborted);
                }
                if self.book.contains(&choice) {
                    break choice;
                }
            }
        };

        self.edit(&target)
    }

    /// Search and print matches. Returns them for callers that want more
    /// than the printed report.
    pub fn search(&mut self, query: &str) -> BTreeMap<String, Entry> {
        let matches = self.book.find(query);
        if matches.is_empty() {
            self.console.say(NO_MATCH);
        } else {
            self.print_matches(&matches);
        }
        matches
    }

    /// Edit sub-loop over a resolved entry. Edits accumulate locally and
    /// apply only on commit (option 4); a rename that collides with another
    /// entry drops the whole edit, phone change included.
    fn edit(&mut self, key: &str) -> Result<AlterOutcome, BookError> {
        let original = match self.book.get(key) {
            Some(entry) => entry.clone(),
            None => {
                self.console.say(NO_MATCH);
                return Ok(AlterOutcome::NoMatch);
            }
        };
        let mut first_name = original.first_name.clone();
        let mut last_name = original.last_name.clone();
        let mut phone_number = original.phone_number.clone();

        loop {
            let mut choice = self.console.prompt(EDIT_MENU)?;
            while !matches!(choice.as_str(), "1" | "2" | "3" | "4") {
                choice = self
                    .console
                    .prompt("Please choose one of the options (1,2,3,4)")?;
            }

            match choice.as_str() {
                "1" => {
                    let mut name =
                        normalize_name(&self.console.prompt("Please enter the new first name")?);
                    while name.is_empty() {
                        name = normalize_name(&self.console.prompt(
                            "This is not valid, please enter the new first name",
                        )?);
                    }
                    first_name = name;
                    self.console.say("New details stored");
                }
                "2" => {
                    last_name = normalize_name(
                        &self
                            .console
                            .prompt("Please enter the new last name (optional)")?,
                    );
                    self.console.say("New details stored");
                }
                "3" => {
                    phone_number = self
                        .console
                        .prompt("Please enter the new phone number (optional)")?;
                    self.console.say("New details stored");
                }
                _ => {
                    if first_name == original.first_name && last_name == original.last_name {
                        self.book.set_phone(key, &phone_number)?;
                        self.console.say("Details successfully changed");
                        return Ok(AlterOutcome::Committed(key.to_string()));
                    }
                    return match self.book.rename(key, &first_name, &last_name, &phone_number) {
                        Ok(new_key) => {
                            self.console.say("Details successfully changed");
                            Ok(AlterOutcome::Committed(new_key))
                        }
                        Err(BookError::DuplicateEntry) => {
                            self.console.say(
                                "This entry already exists, please change the first or last name",
                            );
                            Ok(AlterOutcome::Duplicate)
                        }
                        Err(other) => Err(other),
                    };
                }
            }
        }
    }

    /// Exact-key fast path is only trusted when a last name is present.
    fn exact_hit(&self, query: &str) -> bool {
        self.book
            .get(query)
            .is_some_and(|entry| !entry.last_name.is_empty())
    }

    fn print_matches(&mut self, matches: &BTreeMap<String, Entry>) {
        self.console.say("Here are the matching entries:");
        for entry in matches.values() {
            self.console.say(&format_entry(entry));
        }
    }
}

/// One-line report format shared by search results and the list views.
pub fn format_entry(entry: &Entry) -> String {
    if entry.last_name.is_empty() {
        format!(
            "Name: {} / Phone number: {}",
            entry.first_name, entry.phone_number
        )
    } else {
        format!(
            "First name: {} / Last name: {} / Phone number: {}",
            entry.first_name, entry.last_name, entry.phone_number
        )
    }
}
