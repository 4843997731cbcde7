//! Command layer for the interactive prompt.
//!
//! - **parser**: tokenizer and the `Command` table
//! - **handlers**: one function per command, operating on the `AddressBook`
//! - **dispatcher**: routing plus the single error-to-text boundary

pub mod dispatcher;
pub mod handlers;
pub mod parser;

pub use dispatcher::{CommandDispatcher, Outcome};
pub use parser::{parse_input, Command};
