//! CRUD handlers for /api/persons

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;

use phonebook_common::{Person, PersonId, PersonUpdate};

use crate::api::ApiError;
use crate::AppState;

/// Create payload. Fields are optional so presence can be checked with the
/// contract's own messages instead of serde's missing-field error.
#[derive(Debug, Deserialize)]
pub struct CreatePersonRequest {
    pub name: Option<String>,
    pub number: Option<String>,
}

/// Update payload. Absent fields leave the stored value untouched.
#[derive(Debug, Deserialize)]
pub struct UpdatePersonRequest {
    pub name: Option<String>,
    pub number: Option<String>,
}

/// GET /api/persons
///
/// Full record set as a JSON array. No pagination.
pub async fn list_persons(State(state): State<AppState>) -> Result<Json<Vec<Person>>, ApiError> {
    let people = state.store.list().await?;
    Ok(Json(people))
}

/// GET /api/persons/:id
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let id = PersonId::parse(&id)?;
    match state.store.get(id).await? {
        Some(person) => Ok(Json(person)),
        None => Err(ApiError::PersonNotFound),
    }
}

/// POST /api/persons
///
/// Requires non-empty `name` and `number`. Duplicate names are accepted.
pub async fn create_person(
    State(state): State<AppState>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let Json(body) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let name = require_field(body.name, "name missing")?;
    let number = require_field(body.number, "number missing")?;

    let person = state.store.insert(&name, &number).await?;
    Ok(Json(person))
}

/// PUT /api/persons/:id
///
/// Applies the provided fields and returns the record with the new values
/// reflected. A missing target is its own failure condition, distinct from
/// the plain lookup miss.
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<UpdatePersonRequest>, JsonRejection>,
) -> Result<Json<Person>, ApiError> {
    let id = PersonId::parse(&id)?;
    let Json(body) = payload.map_err(|rejection| ApiError::Validation(rejection.body_text()))?;

    let update = PersonUpdate {
        name: body.name.map(|name| require_non_empty(name, "name missing")).transpose()?,
        number: body
            .number
            .map(|number| require_non_empty(number, "number missing"))
            .transpose()?,
    };

    match state.store.update(id, update).await? {
        Some(person) => Ok(Json(person)),
        None => Err(ApiError::UpdateTargetMissing),
    }
}

/// DELETE /api/persons/:id
///
/// Always 204 regardless of whether a record existed.
pub async fn delete_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let id = PersonId::parse(&id)?;
    state.store.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn require_field(value: Option<String>, message: &str) -> Result<String, ApiError> {
    match value {
        Some(value) => require_non_empty(value, message),
        None => Err(ApiError::Validation(message.to_string())),
    }
}

fn require_non_empty(value: String, message: &str) -> Result<String, ApiError> {
    if value.is_empty() {
        Err(ApiError::Validation(message.to_string()))
    } else {
        Ok(value)
    }
}
