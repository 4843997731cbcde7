//! One handler per command.
//!
//! Each handler makes exactly one change to or query of the book and returns
//! the reply text. Failures are returned as `BookError` and translated for
//! the console by the dispatcher.

use crate::commands::parser::Command;
use crate::domain::PhoneNumber;
use crate::error::{BookError, BookResult};
use crate::models::Record;
use crate::store::AddressBook;
use chrono::NaiveDate;

/// Check that `args` holds at least the arguments `command` requires.
pub fn require_args(command: Command, args: &[&str]) -> BookResult<()> {
    let expected = command.arguments().len();
    if args.len() < expected {
        return Err(BookError::ArgumentCount {
            command: command.name().to_string(),
            expected,
            got: args.len(),
        });
    }
    Ok(())
}

fn existing<'a>(book: &'a mut AddressBook, name: &str) -> BookResult<&'a mut Record> {
    book.find_mut(name)
        .ok_or_else(|| BookError::NotFound(name.to_string()))
}

pub fn hello() -> BookResult<String> {
    Ok("How can I help you?".to_string())
}

/// Append a phone to `name`, creating the record first if needed.
pub fn add_contact(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    require_args(Command::Add, args)?;
    let (name, phone) = (args[0], args[1]);

    // Validate before creating so a bad phone never leaves an empty record.
    let phone = PhoneNumber::new(phone)?;
    if book.find(name).is_none() {
        book.add(Record::new(name)?);
    }
    existing(book, name)?.push_phone(phone);
    Ok("Contact added.".to_string())
}

/// Append a phone to an existing record.
pub fn change_contact(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    require_args(Command::Change, args)?;
    existing(book, args[0])?.add_phone(args[1])?;
    Ok("Contact updated.".to_string())
}

pub fn show_phone(book: &AddressBook, args: &[&str]) -> BookResult<String> {
    require_args(Command::Phone, args)?;
    book.find(args[0])
        .map(Record::phones_line)
        .ok_or_else(|| BookError::NotFound(args[0].to_string()))
}

pub fn show_all(book: &AddressBook) -> BookResult<String> {
    Ok(book.render_all())
}

pub fn add_birthday(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    require_args(Command::AddBirthday, args)?;
    existing(book, args[0])?.set_birthday(args[1])?;
    Ok("Birthday added to the contact.".to_string())
}

pub fn show_birthday(book: &AddressBook, args: &[&str]) -> BookResult<String> {
    require_args(Command::ShowBirthday, args)?;
    let record = book
        .find(args[0])
        .ok_or_else(|| BookError::NotFound(args[0].to_string()))?;

    Ok(match record.birthday() {
        Some(birthday) => format!("{}'s birthday: {}", record.name(), birthday),
        None => "Birthday not set for this contact.".to_string(),
    })
}

fn window_phrase(days: u64) -> String {
    match days {
        1 => "day".to_string(),
        7 => "week".to_string(),
        n => format!("{} days", n),
    }
}

/// List records with a birthday in `[today, today + window_days]`.
pub fn birthdays(book: &AddressBook, today: NaiveDate, window_days: u64) -> BookResult<String> {
    let upcoming = book.upcoming_birthdays_within(today, window_days);
    if upcoming.is_empty() {
        return Ok(format!(
            "No upcoming birthdays in the next {}.",
            window_phrase(window_days)
        ));
    }

    let mut lines = vec!["Upcoming birthdays:".to_string()];
    for record in upcoming {
        if let Some(birthday) = record.birthday() {
            lines.push(format!("{}'s birthday: {}", record.name(), birthday));
        }
    }
    Ok(lines.join("\n"))
}

pub fn delete_contact(book: &mut AddressBook, args: &[&str]) -> BookResult<String> {
    require_args(Command::Delete, args)?;
    if !book.remove(args[0]) {
        return Err(BookError::NotFound(args[0].to_string()));
    }
    Ok("Contact deleted.".to_string())
}

pub fn help() -> BookResult<String> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(Command::ALL.iter().map(|c| format!("  {}", c.usage())));
    Ok(lines.join("\n"))
}
