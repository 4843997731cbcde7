//! Input tokenizing and the command table.

use std::fmt;
use std::str::FromStr;

/// A command recognized by the prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Add,
    Change,
    Phone,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Delete,
    Help,
    Exit,
    Invalid,
}

impl Command {
    /// Every command that has a name, in help-listing order.
    pub const ALL: [Command; 11] = [
        Command::Hello,
        Command::Add,
        Command::Change,
        Command::Phone,
        Command::All,
        Command::AddBirthday,
        Command::ShowBirthday,
        Command::Birthdays,
        Command::Delete,
        Command::Help,
        Command::Exit,
    ];

    /// Canonical name typed at the prompt.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Hello => "hello",
            Command::Add => "add",
            Command::Change => "change",
            Command::Phone => "phone",
            Command::All => "all",
            Command::AddBirthday => "add-birthday",
            Command::ShowBirthday => "show-birthday",
            Command::Birthdays => "birthdays",
            Command::Delete => "delete",
            Command::Help => "help",
            Command::Exit => "exit",
            Command::Invalid => "",
        }
    }

    /// Names of the required arguments, in order.
    pub fn arguments(&self) -> &'static [&'static str] {
        match self {
            Command::Add | Command::Change => &["name", "phone"],
            Command::AddBirthday => &["name", "DD.MM.YYYY"],
            Command::Phone | Command::ShowBirthday | Command::Delete => &["name"],
            _ => &[],
        }
    }

    pub fn usage(&self) -> String {
        let mut usage = self.name().to_string();
        for arg in self.arguments() {
            usage.push_str(&format!(" <{}>", arg));
        }
        usage
    }
}

impl FromStr for Command {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "hello" => Command::Hello,
            "add" => Command::Add,
            "change" => Command::Change,
            "phone" => Command::Phone,
            "all" => Command::All,
            "add-birthday" => Command::AddBirthday,
            "show-birthday" => Command::ShowBirthday,
            "birthdays" => Command::Birthdays,
            "delete" => Command::Delete,
            "help" => Command::Help,
            "close" | "exit" => Command::Exit,
            _ => Command::Invalid,
        })
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Split an input line into a command and its arguments.
///
/// Tokens are separated by whitespace. An empty line yields `Command::Invalid`.
pub fn parse_input(line: &str) -> (Command, Vec<&str>) {
    let mut tokens = line.split_whitespace();
    let command = match tokens.next() {
        Some(token) => token.parse::<Command>().unwrap_or(Command::Invalid),
        None => Command::Invalid,
    };
    (command, tokens.collect())
}
