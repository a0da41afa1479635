//! Persistence collaborator
//!
//! One object-safe trait over the contact collection with two backends:
//! MongoDB for production and an in-memory map for tests.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use async_trait::async_trait;

use crate::error::Result;
use crate::person::{Person, PersonId, PersonUpdate};

/// Storage operations over the contact collection.
///
/// All operations are atomic per document; no cross-record guarantees.
#[async_trait]
pub trait PersonStore: Send + Sync {
    /// All records, unbounded.
    async fn list(&self) -> Result<Vec<Person>>;

    /// Lookup by id. `None` when the id is well-formed but matches nothing.
    async fn get(&self, id: PersonId) -> Result<Option<Person>>;

    /// Persist a new record, assigning its identifier.
    async fn insert(&self, name: &str, number: &str) -> Result<Person>;

    /// Apply the provided fields and return the record with the new values
    /// reflected. `None` when the target does not exist.
    async fn update(&self, id: PersonId, update: PersonUpdate) -> Result<Option<Person>>;

    /// Delete if present. `false` when nothing was deleted.
    async fn delete(&self, id: PersonId) -> Result<bool>;

    /// Total record count.
    async fn count(&self) -> Result<u64>;
}
