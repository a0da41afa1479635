//! MongoDB store backend

use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, Document};
use mongodb::options::{ClientOptions, FindOneAndUpdateOptions, ReturnDocument};
use mongodb::{Client, Collection};
use tracing::info;

use crate::config::{StoreConfig, COLLECTION, DEFAULT_DATABASE};
use crate::error::{Error, Result};
use crate::person::{Person, PersonId, PersonUpdate};
use crate::store::PersonStore;

/// Production [`PersonStore`] over one MongoDB collection.
pub struct MongoStore {
    people: Collection<Document>,
}

impl MongoStore {
    /// Connect and select the `people` collection. The URI's path component
    /// picks the database, falling back to [`DEFAULT_DATABASE`].
    pub async fn connect(config: &StoreConfig) -> Result<Self> {
        let options = ClientOptions::parse(&config.uri).await?;
        let client = Client::with_options(options)?;
        let database = client
            .default_database()
            .unwrap_or_else(|| client.database(DEFAULT_DATABASE));
        info!("Connected to MongoDB database {}", database.name());
        Ok(Self {
            people: database.collection(COLLECTION),
        })
    }
}

#[async_trait]
impl PersonStore for MongoStore {
    async fn list(&self) -> Result<Vec<Person>> {
        let mut cursor = self.people.find(doc! {}, None).await?;
        let mut people = Vec::new();
        while let Some(document) = cursor.try_next().await? {
            people.push(person_from_document(document)?);
        }
        Ok(people)
    }

    async fn get(&self, id: PersonId) -> Result<Option<Person>> {
        let document = self
            .people
            .find_one(doc! { "_id": id.as_object_id() }, None)
            .await?;
        document.map(person_from_document).transpose()
    }

    async fn insert(&self, name: &str, number: &str) -> Result<Person> {
        let person = Person {
            id: PersonId::new(),
            name: name.to_string(),
            number: number.to_string(),
        };
        self.people
            .insert_one(document_from_person(&person), None)
            .await?;
        Ok(person)
    }

    async fn update(&self, id: PersonId, update: PersonUpdate) -> Result<Option<Person>> {
        // An update carrying no fields degenerates to a lookup; an empty
        // $set is not a valid update document.
        if update.is_empty() {
            return self.get(id).await;
        }

        let mut set = Document::new();
        if let Some(name) = update.name {
            set.insert("name", name);
        }
        if let Some(number) = update.number {
            set.insert("number", number);
        }

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();
        let document = self
            .people
            .find_one_and_update(doc! { "_id": id.as_object_id() }, doc! { "$set": set }, options)
            .await?;
        document.map(person_from_document).transpose()
    }

    async fn delete(&self, id: PersonId) -> Result<bool> {
        let result = self
            .people
            .delete_one(doc! { "_id": id.as_object_id() }, None)
            .await?;
        Ok(result.deleted_count > 0)
    }

    async fn count(&self) -> Result<u64> {
        Ok(self.people.count_documents(doc! {}, None).await?)
    }
}

fn document_from_person(person: &Person) -> Document {
    doc! {
        "_id": person.id.as_object_id(),
        "name": &person.name,
        "number": &person.number,
    }
}

// Storage typing is permissive: missing or non-string name/number fields
// read back as empty strings rather than failing the whole request.
fn person_from_document(document: Document) -> Result<Person> {
    let id = document
        .get_object_id("_id")
        .map_err(|e| Error::Internal(format!("document without ObjectId _id: {}", e)))?;
    let name = document.get_str("name").unwrap_or_default().to_string();
    let number = document.get_str("number").unwrap_or_default().to_string();
    Ok(Person {
        id: PersonId::from(id),
        name,
        number,
    })
}
