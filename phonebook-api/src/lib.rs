//! phonebook-api library - HTTP API service
//!
//! Router construction and the handlers behind the /api/persons CRUD
//! surface, the /info summary page and the /health endpoint.

use std::path::Path;
use std::sync::Arc;

use axum::handler::HandlerWithoutStateExt;
use axum::middleware;
use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;

use phonebook_common::PersonStore;

pub mod api;
pub mod logging;

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Persistence collaborator (all record state lives behind it)
    pub store: Arc<dyn PersonStore>,
}

impl AppState {
    /// Create new application state
    pub fn new(store: Arc<dyn PersonStore>) -> Self {
        Self { store }
    }
}

/// Build application router
///
/// Requests matching no route fall through to static files under
/// `static_dir`; when no file matches either, the unknown-endpoint
/// handler answers 404.
pub fn build_router(state: AppState, static_dir: impl AsRef<Path>) -> Router {
    let static_files =
        ServeDir::new(static_dir).not_found_service(api::unknown_endpoint.into_service());

    Router::new()
        .route(
            "/api/persons",
            get(api::list_persons).post(api::create_person),
        )
        .route(
            "/api/persons/:id",
            get(api::get_person)
                .put(api::update_person)
                .delete(api::delete_person),
        )
        .route("/info", get(api::info_page))
        .merge(api::health_routes())
        .fallback_service(static_files)
        .layer(middleware::from_fn(logging::log_requests))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
