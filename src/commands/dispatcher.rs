//! Routes parsed input to handlers and turns failures into console text.

use crate::commands::handlers;
use crate::commands::parser::{parse_input, Command};
use crate::error::{BookError, BookResult};
use crate::store::{AddressBook, DEFAULT_WINDOW_DAYS};
use chrono::{Local, NaiveDate};
use tracing::{debug, warn};

/// What the prompt loop should do after a line has been handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print the text and read the next line
    Reply(String),
    /// Persist the book and stop
    Exit,
}

/// Executes input lines against an address book.
///
/// This is the only place `BookError` is converted into user-facing text,
/// so every handler reports failures the same way.
pub struct CommandDispatcher {
    window_days: u64,
    today: Box<dyn Fn() -> NaiveDate>,
}

impl CommandDispatcher {
    /// Dispatcher using the local calendar date for "today".
    pub fn new(window_days: u64) -> Self {
        Self::with_clock(window_days, || Local::now().date_naive())
    }

    /// Dispatcher with a custom source for "today".
    pub fn with_clock(window_days: u64, today: impl Fn() -> NaiveDate + 'static) -> Self {
        Self {
            window_days,
            today: Box::new(today),
        }
    }

    /// Handle one line of input. Never fails; errors become replies.
    pub fn execute(&self, book: &mut AddressBook, line: &str) -> Outcome {
        let (command, args) = parse_input(line);
        debug!(%command, args = args.len(), "dispatching command");

        if command == Command::Exit {
            return Outcome::Exit;
        }

        match self.run(command, book, &args) {
            Ok(reply) => Outcome::Reply(reply),
            Err(err) => {
                warn!(%command, error = %err, "command failed");
                Outcome::Reply(Self::describe_error(&err))
            }
        }
    }

    fn run(&self, command: Command, book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
        match command {
            Command::Hello => handlers::hello(),
            Command::Add => handlers::add_contact(book, args),
            Command::Change => handlers::change_contact(book, args),
            Command::Phone => handlers::show_phone(book, args),
            Command::All => handlers::show_all(book),
            Command::AddBirthday => handlers::add_birthday(book, args),
            Command::ShowBirthday => handlers::show_birthday(book, args),
            Command::Birthdays => handlers::birthdays(book, (self.today)(), self.window_days),
            Command::Delete => handlers::delete_contact(book, args),
            Command::Help => handlers::help(),
            Command::Exit | Command::Invalid => Ok("Invalid command. Try again.".to_string()),
        }
    }

    fn describe_error(err: &BookError) -> String {
        match err {
            BookError::NotFound(_) => "Contact not found.".to_string(),
            BookError::Validation(_) | BookError::ArgumentCount { .. } => {
                format!("Input error: {}", err)
            }
        }
    }
}

impl Default for CommandDispatcher {
    fn default() -> Self {
        Self::new(DEFAULT_WINDOW_DAYS)
    }
}
