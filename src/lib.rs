//! Contact Book - an interactive command-line address book.
//!
//! Keeps contacts (name, phone numbers, birthday) in memory, answers a small
//! set of queries including upcoming birthdays, and persists the whole book
//! to a local JSON file between sessions.
//!
//! # Architecture
//!
//! - **domain**: Validated value types for names, phones, and birthdays
//! - **models**: The contact `Record`
//! - **store**: The `AddressBook` collection and the upcoming-birthdays query
//! - **commands**: Tokenizer, command handlers, and the dispatch boundary
//! - **repositories**: Loading and saving the book
//! - **session**: The prompt loop tying everything together
//! - **config**: Configuration from environment variables
//! - **error**: Custom error types for precise error handling

pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repositories;
pub mod session;
pub mod store;

pub use commands::{CommandDispatcher, Outcome};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{BookError, ConfigError, SessionError, StorageError};
pub use models::Record;
pub use repositories::{BookRepository, JsonFileRepository};
pub use session::run_session;
pub use store::AddressBook;
