//! Database abstraction layer.
//!
//! Trait-based data access so the HTTP layer stays agnostic of the storage
//! backend.
//!
//! # Architecture
//!
//! - `error`: Storage-agnostic error types
//! - `models`: Domain entities (Board, List, Card) and creation inputs
//! - `position`: Sibling position assignment for lists and cards
//! - `repository`: Trait definitions for data access
//! - `sqlite`: SQLx-backed implementation

mod error;
mod models;
pub mod position;
mod repository;
pub mod sqlite;
pub mod utils;


pub use error::{DbError, DbResult};
pub use models::*;
pub use repository::*;
pub use sqlite::SqliteDatabase;
