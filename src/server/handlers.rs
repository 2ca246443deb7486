//! Console command handlers.
//!
//! Each command is turned into one [`ContactManager`] event. After events that
//! can change what is visible, the contact list is rendered again.

use super::command::{Command, HELP};
use crate::models::Contact;
use crate::services::ContactManager;
use std::io::{self, Write};

/// What the read loop should do after a line was handled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Continue,
    Quit,
}

/// Line-oriented front end over a [`ContactManager`].
#[derive(Debug, Default)]
pub struct ContactConsole {
    manager: ContactManager,
}

impl ContactConsole {
    pub fn new(manager: ContactManager) -> Self {
        Self { manager }
    }

    pub fn manager(&self) -> &ContactManager {
        &self.manager
    }

    /// Parse and run one input line, writing any output to `out`.
    pub fn handle_line<W: Write>(&mut self, line: &str, out: &mut W) -> io::Result<Outcome> {
        match Command::parse(line) {
            Ok(Some(command)) => self.handle(command, out),
            Ok(None) => Ok(Outcome::Continue),
            Err(e) => {
                tracing::debug!(error = %e, "Could not parse command");
                write_error(out, &e)?;
                Ok(Outcome::Continue)
            }
        }
    }

    /// Run one parsed command.
    pub fn handle<W: Write>(&mut self, command: Command, out: &mut W) -> io::Result<Outcome> {
        tracing::debug!(?command, "Handling command");

        match command {
            Command::Add { name, email } => {
                match self.manager.add_contact(&name, &email) {
                    Ok(contact) => writeln!(out, "added contact #{}", contact.id())?,
                    Err(e) => write_error(out, &e)?,
                }
                self.show(out)?;
            }
            Command::Delete(id) => {
                if self.manager.delete_contact(id) {
                    writeln!(out, "deleted contact #{}", id)?;
                } else {
                    writeln!(out, "no contact with id {}", id)?;
                }
                self.show(out)?;
            }
            Command::Search(query) => {
                self.manager.search(query);
                self.show(out)?;
            }
            Command::View(mode) => {
                self.manager.set_view(mode);
                self.show(out)?;
            }
            Command::Show => self.show(out)?,
            Command::Export => {
                let visible: Vec<&Contact> = self.manager.visible().collect();
                let json = serde_json::to_string_pretty(&visible)?;
                writeln!(out, "{}", json)?;
            }
            Command::Help => out.write_all(HELP.as_bytes())?,
            Command::Quit => return Ok(Outcome::Quit),
        }

        Ok(Outcome::Continue)
    }

    fn show<W: Write>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.manager.render().as_bytes())
    }
}

fn write_error<W: Write>(out: &mut W, err: &dyn std::error::Error) -> io::Result<()> {
    writeln!(out, "error: {}", err)
}
