//! Repository layer for persisting the address book.
//!
//! The `BookRepository` trait abstracts where the book is kept, so the
//! command loop can be exercised against an in-memory mock.

pub mod json_file_repository;
pub mod traits;

pub use json_file_repository::JsonFileRepository;
pub use traits::BookRepository;
