//! Console command parsing.

use crate::domain::ContactId;
use crate::error::{CommandError, CommandResult};
use crate::view::ViewMode;

/// A parsed console command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `add <name> | <email>`
    Add { name: String, email: String },
    /// `delete <id>` or `rm <id>`
    Delete(ContactId),
    /// `search [query]`; no query clears the search
    Search(String),
    /// `view grid|list`
    View(ViewMode),
    Show,
    Export,
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines yield `Ok(None)`.
    ///
    /// Keywords are case-insensitive. Arguments keep their case. The search
    /// query is everything after the single space that follows the keyword,
    /// leading and trailing whitespace included, so it reaches the filter as
    /// typed.
    pub fn parse(line: &str) -> CommandResult<Option<Command>> {
        let line = line.trim_end_matches(&['\r', '\n'][..]).trim_start();
        if line.trim().is_empty() {
            return Ok(None);
        }

        let (keyword, rest) = match line.split_once(char::is_whitespace) {
            Some((keyword, rest)) => (keyword, rest),
            None => (line, ""),
        };

        let command = match keyword.to_ascii_lowercase().as_str() {
            "add" => {
                let (name, email) = rest.split_once('|').unwrap_or((rest, ""));
                Command::Add {
                    name: name.trim().to_string(),
                    email: email.trim().to_string(),
                }
            }
            "delete" | "rm" => {
                let arg = rest.trim();
                if arg.is_empty() {
                    return Err(CommandError::Usage("delete <id>"));
                }
                Command::Delete(arg.parse()?)
            }
            "search" => Command::Search(rest.to_string()),
            "view" => {
                let arg = rest.trim();
                if arg.is_empty() {
                    return Err(CommandError::Usage("view grid|list"));
                }
                Command::View(arg.parse()?)
            }
            "show" | "ls" => Command::Show,
            "export" => Command::Export,
            "help" | "?" => Command::Help,
            "quit" | "exit" => Command::Quit,
            _ => return Err(CommandError::Unknown(keyword.to_string())),
        };

        Ok(Some(command))
    }
}

/// Text printed by the `help` command.
pub const HELP: &str = "\
Commands:
  add <name> | <email>   add a contact
  delete <id>            delete a contact (alias: rm)
  search [query]         show contacts whose name contains query
  view grid|list         change how contacts are shown
  show                   show the visible contacts (alias: ls)
  export                 print the visible contacts as JSON
  help                   show this help
  quit                   leave (alias: exit)
";
