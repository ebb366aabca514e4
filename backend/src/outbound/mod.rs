//! Outbound contracts with the hosted database.
//!
//! The database itself is reached by other services; this crate only owns
//! the names it is keyed by:
//!
//! - **tables**: the closed set of table names and their literal strings
//!
//! Adapters here are thin translators and contain no business logic.

pub mod tables;

pub use self::tables::{TableName, UnknownTableName};
