//! Console front end for the contact manager.
//!
//! Reads one command per line and writes results as plain text. This is the
//! event dispatch boundary: every line becomes one event on the session.

pub mod command;
pub mod handlers;

pub use command::Command;
pub use handlers::{ContactConsole, Outcome};

use anyhow::Result;
use std::io::{BufRead, Write};

/// Run the console until `quit` or end of input.
///
/// # Arguments
/// * `console` - The console holding the session state
/// * `input` - Source of command lines
/// * `output` - Destination for command output
///
/// # Returns
/// An error if reading input or writing output fails
pub fn run_server<R, W>(console: &mut ContactConsole, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    for line in input.lines() {
        let line = line?;
        let outcome = console.handle_line(&line, &mut output)?;
        output.flush()?;

        if outcome == Outcome::Quit {
            tracing::info!("Quit requested");
            break;
        }
    }

    Ok(())
}
