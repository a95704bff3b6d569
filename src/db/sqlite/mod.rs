//! SQLite implementation of the database traits.
//!
//! This module provides a SQLx-backed implementation of the repository
//! traits defined in the parent module.

mod board;
mod card;
mod connection;
mod helpers;
mod list;


pub use board::SqliteBoardRepository;
pub use card::SqliteCardRepository;
pub use connection::SqliteDatabase;
pub use list::SqliteListRepository;
