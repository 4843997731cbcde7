//! The interactive prompt loop.
//!
//! Loads the book once, reads commands line by line until `close`/`exit`
//! or end of input, then saves the book once.

use crate::commands::{CommandDispatcher, Outcome};
use crate::error::SessionResult;
use crate::repositories::BookRepository;
use crate::store::AddressBook;
use std::io::{self, BufRead, Write};
use tracing::{error, info};

pub const PROMPT: &str = "Enter a command: ";
pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const GOODBYE: &str = "Good bye!";

/// Run one session against `repository`, reading from `input` and
/// writing replies to `output`.
///
/// The book is saved even when the console fails mid-session; the console
/// error is returned after the save.
pub fn run_session<R, W>(
    repository: &dyn BookRepository,
    dispatcher: &CommandDispatcher,
    input: R,
    output: &mut W,
) -> SessionResult<()>
where
    R: BufRead,
    W: Write,
{
    let mut book = repository.load()?;

    let console = prompt_loop(dispatcher, &mut book, input, output);
    if let Err(e) = &console {
        error!(error = %e, "console failed, saving address book before exiting");
    }

    repository.save(&book)?;
    console?;

    writeln!(output, "{}", GOODBYE)?;
    Ok(())
}

fn prompt_loop<R, W>(
    dispatcher: &CommandDispatcher,
    book: &mut AddressBook,
    mut input: R,
    output: &mut W,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf = Vec::new();
    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            info!("end of input, closing session");
            writeln!(output)?;
            return Ok(());
        }

        // Undecodable bytes become U+FFFD and are then validated like any input.
        let line = String::from_utf8_lossy(&buf);
        match dispatcher.execute(book, &line) {
            Outcome::Reply(text) => writeln!(output, "{}", text)?,
            Outcome::Exit => return Ok(()),
        }
    }
}
