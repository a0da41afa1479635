//! Contact record data model

use std::fmt;
use std::str::FromStr;

use mongodb::bson::oid::ObjectId;
use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// Opaque record identifier assigned by the storage layer on creation.
///
/// Wire format is the 24-character lowercase hex rendering of a BSON
/// ObjectId. Parsing anything else yields [`Error::MalformattedId`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PersonId(ObjectId);

impl PersonId {
    /// Mint a fresh identifier (driver-side generation, like mongoose does).
    pub fn new() -> Self {
        Self(ObjectId::new())
    }

    /// Parse a client-supplied identifier string.
    pub fn parse(s: &str) -> Result<Self, Error> {
        ObjectId::parse_str(s)
            .map(Self)
            .map_err(|_| Error::MalformattedId(s.to_string()))
    }

    pub fn as_object_id(&self) -> ObjectId {
        self.0
    }
}

impl Default for PersonId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<ObjectId> for PersonId {
    fn from(oid: ObjectId) -> Self {
        Self(oid)
    }
}

impl FromStr for PersonId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        Self::parse(s)
    }
}

impl fmt::Display for PersonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.to_hex())
    }
}

// Serialized as the plain hex string on the JSON surface, not as the
// extended-JSON {"$oid": ...} form the ObjectId impls would produce.
impl Serialize for PersonId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_hex())
    }
}

impl<'de> Deserialize<'de> for PersonId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        PersonId::parse(&s).map_err(DeError::custom)
    }
}

/// A single contact entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub number: String,
}

/// Fields to change on an existing record. Absent fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct PersonUpdate {
    pub name: Option<String>,
    pub number: Option<String>,
}

impl PersonUpdate {
    /// True when the update carries no fields at all, in which case it
    /// degenerates to a plain lookup.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.number.is_none()
    }

    pub fn apply(&self, person: &mut Person) {
        if let Some(name) = &self.name {
            person.name = name.clone();
        }
        if let Some(number) = &self.number {
            person.number = number.clone();
        }
    }
}
