//! Shared phonebook library
//!
//! Data model, storage-collaborator trait and its backends, connection
//! configuration and the common error type used by both the HTTP API
//! service and the seeding CLI.

pub mod config;
pub mod error;
pub mod person;
pub mod store;

pub use config::StoreConfig;
pub use error::{Error, Result};
pub use person::{Person, PersonId, PersonUpdate};
pub use store::{MemoryStore, MongoStore, PersonStore};
