//! End-to-end tests for the console front end.
//!
//! Each test feeds a script through `run_server` and checks the exact text
//! written back, the same way a user would see it.

mod fixtures;

use contact_manager::server::run_server;
use contact_manager::{ContactConsole, ContactManager, ViewMode};
use std::io::Cursor;

fn run_script(view: ViewMode, script: &str) -> (String, ContactConsole) {
    let mut console = ContactConsole::new(ContactManager::new(view));
    let mut output = Vec::new();
    run_server(&mut console, Cursor::new(script), &mut output).unwrap();
    (String::from_utf8(output).unwrap(), console)
}

#[test]
fn test_reference_session() {
    let script = "\
add Alice | al@ex.com
add Bob | al@ex.com
add Bob | bo@ex.com
search o
delete 1
search
";
    let (output, console) = run_script(ViewMode::Grid, script);

    let expected = "\
added contact #1
[#1]
Name: Alice
Email: al@ex.com
error: Email already in use
[#1]
Name: Alice
Email: al@ex.com
added contact #2
[#1]
Name: Alice
Email: al@ex.com

[#2]
Name: Bob
Email: bo@ex.com
[#2]
Name: Bob
Email: bo@ex.com
deleted contact #1
[#2]
Name: Bob
Email: bo@ex.com
[#2]
Name: Bob
Email: bo@ex.com
";
    assert_eq!(output, expected);
    assert_eq!(fixtures::names(console.manager().store().iter()), vec!["Bob"]);
}

#[test]
fn test_list_view_session() {
    let script = "\
add Alice | al@ex.com
add Robert | rob@ex.com
view list
search ob
";
    let (output, console) = run_script(ViewMode::Grid, script);

    assert!(output.ends_with(
        "\
ID  Name    Email
1   Alice   al@ex.com
2   Robert  rob@ex.com
ID  Name    Email
2   Robert  rob@ex.com
"
    ));
    assert_eq!(console.manager().view(), ViewMode::List);
    assert_eq!(console.manager().query(), "ob");
}

#[test]
fn test_add_resets_search() {
    let script = "\
add Alice | al@ex.com
search zzz
add Bob | bo@ex.com
";
    let (output, console) = run_script(ViewMode::List, script);

    assert!(output.contains("No contacts.\n"));
    assert_eq!(console.manager().query(), "");
    assert!(output.ends_with("1   Alice  al@ex.com\n2   Bob    bo@ex.com\n"));
}

#[test]
fn test_invalid_input_and_unknown_commands() {
    let script = "\
add | al@ex.com
add Alice | a@bc.de
add Alice
frobnicate
delete zero
";
    let (output, console) = run_script(ViewMode::Grid, script);

    let errors: Vec<&str> = output
        .lines()
        .filter(|line| line.starts_with("error: "))
        .collect();
    assert_eq!(
        errors,
        vec![
            "error: Please enter valid data",
            "error: Please enter valid data",
            "error: Please enter valid data",
            "error: unknown command: frobnicate (try 'help')",
            "error: Invalid contact ID: zero",
        ]
    );
    assert!(console.manager().store().is_empty());
}

#[test]
fn test_search_with_leading_space() {
    let script = "\
add Ann Lee | an@ex.com
add Leela | le@ex.com
search  Lee
";
    let (output, console) = run_script(ViewMode::List, script);

    assert_eq!(console.manager().query(), " Lee");
    assert!(output.ends_with("ID  Name     Email\n1   Ann Lee  an@ex.com\n"));
}

#[test]
fn test_quit_stops_processing() {
    let script = "\
add Alice | al@ex.com
quit
add Bob | bo@ex.com
";
    let (_, console) = run_script(ViewMode::Grid, script);
    assert_eq!(console.manager().store().len(), 1);
}

#[test]
fn test_blank_lines_and_help() {
    let (output, _) = run_script(ViewMode::Grid, "\n   \nhelp\n");
    assert!(output.starts_with("Commands:\n"));
    assert!(output.contains("add <name> | <email>"));
}

#[test]
fn test_export_after_delete() {
    let script = "\
add Alice | al@ex.com
add Bob | bo@ex.com
rm 1
add Carol | ca@ex.com
export
";
    let (output, _) = run_script(ViewMode::Grid, script);
    let json_start = output.rfind("[\n").unwrap();
    let value: serde_json::Value = serde_json::from_str(&output[json_start..]).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            { "id": 2, "name": "Bob", "email": "bo@ex.com" },
            { "id": 3, "name": "Carol", "email": "ca@ex.com" }
        ])
    );
}
