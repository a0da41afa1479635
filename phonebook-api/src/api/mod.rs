//! HTTP API handlers for phonebook-api

pub mod error;
pub mod health;
pub mod info;
pub mod persons;

pub use error::{unknown_endpoint, ApiError};
pub use health::health_routes;
pub use info::info_page;
pub use persons::{create_person, delete_person, get_person, list_persons, update_person};
