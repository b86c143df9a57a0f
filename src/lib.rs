//! userdir - a searchable, paginated in-memory user directory
//!
//! The core is [`query::RecordQueryEngine`]; the server and CLI are thin
//! callers around it.

pub mod cli;
pub mod config;
pub mod query;
pub mod records;
pub mod server;

pub use query::{PageRequest, QueryPage, RecordQueryEngine, Searchable};
