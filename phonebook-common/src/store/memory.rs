//! In-memory store backend for tests
//!
//! Mints the same ObjectId key format as the MongoDB backend so
//! malformed-id semantics are identical across backends.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::Result;
use crate::person::{Person, PersonId, PersonUpdate};
use crate::store::PersonStore;

/// Map-backed [`PersonStore`] with no persistence.
#[derive(Default)]
pub struct MemoryStore {
    people: RwLock<HashMap<PersonId, Person>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PersonStore for MemoryStore {
    async fn list(&self) -> Result<Vec<Person>> {
        Ok(self.people.read().await.values().cloned().collect())
    }

    async fn get(&self, id: PersonId) -> Result<Option<Person>> {
        Ok(self.people.read().await.get(&id).cloned())
    }

    async fn insert(&self, name: &str, number: &str) -> Result<Person> {
        let person = Person {
            id: PersonId::new(),
            name: name.to_string(),
            number: number.to_string(),
        };
        self.people.write().await.insert(person.id, person.clone());
        Ok(person)
    }

    async fn update(&self, id: PersonId, update: PersonUpdate) -> Result<Option<Person>> {
        let mut people = self.people.write().await;
        Ok(people.get_mut(&id).map(|person| {
            update.apply(person);
            person.clone()
        }))
    }

    async fn delete(&self, id: PersonId) -> Result<bool> {
        Ok(self.people.write().await.remove(&id).is_some())
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.people.read().await.len() as u64)
    }
}
