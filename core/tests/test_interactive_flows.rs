// End-to-end flows driven through a scripted console, no terminal involved.

use rolodex_core::{
    AddOutcome, AddressBook, AlterOutcome, RemoveOutcome, ScriptedConsole, Session,
};

#[test]
fn test_add_then_find_round_trip() {
    let mut book = AddressBook::new();
    let mut console = ScriptedConsole::new(Vec::<String>::new());

    let outcome = Session::new(&mut book, &mut console)
        .add("Alice", "Zane", "555-0101")
        .unwrap();
    assert_eq!(outcome, AddOutcome::Added("Alice Zane".to_string()));
    assert!(console.said("Alice Zane successfully added"));

    let matches = book.find("Alice Zane");
    assert_eq!(matches.len(), 1);
    let entry = &matches["Alice Zane"];
    assert_eq!(entry.first_name, "Alice");
    assert_eq!(entry.last_name, "Zane");
    assert_eq!(entry.phone_number, "555-0101");
}

#[test]
fn test_duplicate_add_reported_and_store_unchanged() {
    let mut book = AddressBook::new();
    let mut console = ScriptedConsole::new(Vec::<String>::new());

    let mut session = Session::new(&mut book, &mut console);
    session.add("John", "Smith", "111").unwrap();
    let outcome = session.add("John", "Smith", "222").unwrap();

    assert_eq!(outcome, AddOutcome::Duplicate("John Smith".to_string()));
    assert!(console.said("This entry already exists"));
    assert_eq!(book.len(), 1);
    assert_eq!(book.get("John Smith").unwrap().phone_number, "111");
}

#[test]
fn test_remove_ambiguous_first_name_surfaces_both_candidates() {
    let mut book = AddressBook::new();
    book.insert("John", "Smith", "").unwrap();
    book.insert("John", "Doe", "").unwrap();

    // Aborting after the candidate list proves nothing was deleted silently.
    let mut console = ScriptedConsole::new(["Q"]);
    let outcome = Session::new(&mut book, &mut console)
        .remove("John")
        .unwrap();

    assert_eq!(outcome, RemoveOutcome::Aborted);
    assert!(console.said("Here are the matching entries:"));
    assert!(console.said("First name: John / Last name: Smith"));
    assert!(console.said("First name: John / Last name: Doe"));
    assert_eq!(book.len(), 2);
}

#[test]
fn test_remove_exact_key_with_last_name_skips_disambiguation() {
    let mut book = AddressBook::new();
    book.insert("John", "Smith", "").unwrap();
    book.insert("John", "Doe", "").unwrap();

    let mut console = ScriptedConsole::new(Vec::<String>::new());
    let outcome = Session::new(&mut book, &mut console)
        .remove("John Smith")
        .unwrap();

    assert_eq!(outcome, RemoveOutcome::Removed("John Smith".to_string()));
    assert!(book.contains("John Doe"));
    assert_eq!(book.len(), 1);
}

#[test]
fn test_remove_blank_query_and_no_match() {
    let mut book = AddressBook::new();
    let mut console = ScriptedConsole::new(Vec::<String>::new());

    let mut session = Session::new(&mut book, &mut console);
    assert_eq!(session.remove("  ").unwrap(), RemoveOutcome::NoMatch);
    assert_eq!(session.remove("Nobody").unwrap(), RemoveOutcome::NoMatch);
    assert!(console.said("No matching entries for that name"));
}

#[test]
fn test_sort_orders_disagree_on_young_and_zane() {
    let mut book = AddressBook::new();
    book.insert("Bob", "Young", "").unwrap();
    book.insert("Alice", "Zane", "").unwrap();

    let by_first: Vec<String> = book
        .sorted_by_first_name()
        .values()
        .map(|e| e.key())
        .collect();
    assert_eq!(by_first, vec!["Alice Zane", "Bob Young"]);

    // Last-name view puts Young before Zane, so Bob comes first.
    let by_last: Vec<String> = book
        .sorted_by_last_name()
        .values()
        .map(|e| e.key())
        .collect();
    assert_eq!(by_last, vec!["Bob Young", "Alice Zane"]);
}

#[test]
fn test_find_jo_prefix_covers_first_and_last_names() {
    let mut book = AddressBook::new();
    book.insert("John", "Smith", "").unwrap();
    book.insert("Joan", "Park", "").unwrap();
    book.insert("Mark", "Jordan", "").unwrap();
    book.insert("Banjo", "Reed", "").unwrap();

    let matches = book.find("jo");
    let keys: Vec<&String> = matches.keys().collect();
    // "Banjo" contains "jo" but does not start with it.
    assert_eq!(keys, vec!["Joan Park", "John Smith", "Mark Jordan"]);
}

#[test]
fn test_alter_phone_only_keeps_key_and_names() {
    let mut book = AddressBook::new();
    book.insert("John", "Smith", "111").unwrap();

    let mut console = ScriptedConsole::new(["3", "999", "4"]);
    let outcome = Session::new(&mut book, &mut console)
        .alter("John Smith")
        .unwrap();

    assert_eq!(outcome, AlterOutcome::Committed("John Smith".to_string()));
    let entry = book.get("John Smith").unwrap();
    assert_eq!(entry.first_name, "John");
    assert_eq!(entry.last_name, "Smith");
    assert_eq!(entry.phone_number, "999");
}

#[test]
fn test_alter_rename_rekeys_the_entry() {
    let mut book = AddressBook::new();
    book.insert("John", "Smith", "111").unwrap();

    // New first name, new last name, then commit.
    let mut console = ScriptedConsole::new(["1", "Jon", "2", "Smythe", "4"]);
    let outcome = Session::new(&mut book, &mut console)
        .alter("John Smith")
        .unwrap();

    assert_eq!(outcome, AlterOutcome::Committed("Jon Smythe".to_string()));
    assert!(!book.contains("John Smith"));
    let entry = book.get("Jon Smythe").unwrap();
    assert_eq!(entry.first_name, "Jon");
    assert_eq!(entry.last_name, "Smythe");
    assert_eq!(entry.phone_number, "111");
}

#[test]
fn test_alter_rename_collision_leaves_both_entries_unmodified() {
    let mut book = AddressBook::new();
    book.insert("John", "Smith", "111").unwrap();
    book.insert("John", "Doe", "222").unwrap();

    // Rename John Doe to John Smith with a phone edit in the same sitting.
    let mut console = ScriptedConsole::new(["2", "Smith", "3", "333", "4"]);
    let outcome = Session::new(&mut book, &mut console)
        .alter("John Doe")
        .unwrap();

    assert_eq!(outcome, AlterOutcome::Duplicate);
    assert!(console.said("This entry already exists"));
    assert_eq!(book.get("John Smith").unwrap().phone_number, "111");
    assert_eq!(book.get("John Doe").unwrap().phone_number, "222");
}

#[test]
fn test_alter_ambiguous_query_resolved_by_pick() {
    let mut book = AddressBook::new();
    book.insert("John", "Smith", "111").unwrap();
    book.insert("John", "Doe", "222").unwrap();

    // Pick John Doe from the candidates, then change the phone number.
    let mut console = ScriptedConsole::new(["John Doe", "3", "444", "4"]);
    let outcome = Session::new(&mut book, &mut console)
        .alter("John")
        .unwrap();

    assert_eq!(outcome, AlterOutcome::Committed("John Doe".to_string()));
    assert_eq!(book.get("John Doe").unwrap().phone_number, "444");
    assert_eq!(book.get("John Smith").unwrap().phone_number, "111");
}

#[test]
fn test_search_reports_no_match_for_blank_query() {
    let mut book = AddressBook::new();
    book.insert("John", "Smith", "").unwrap();

    let mut console = ScriptedConsole::new(Vec::<String>::new());
    let matches = Session::new(&mut book, &mut console).search("   ");
    assert!(matches.is_empty());
    assert!(console.said("No matching entries for that name"));
}
