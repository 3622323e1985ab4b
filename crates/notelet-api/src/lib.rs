//! # notelet-api
//!
//! HTTP surface of the notelet notes service: wire types, error mapping,
//! handlers, and the router. The binary in `main.rs` wires this to a real
//! database and a listener.

pub mod error;
pub mod handlers;
pub mod wire;

use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use notelet_db::Database;

pub use error::ApiError;

/// Application state shared across handlers.
///
/// The store handle is threaded through here explicitly; nothing reaches
/// for process-global state.
#[derive(Clone)]
pub struct AppState {
    pub db: Database,
}

/// Build the application router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route(
            "/notes",
            get(handlers::list_notes)
                .post(handlers::create_note)
                .delete(handlers::delete_all_notes),
        )
        .route(
            "/notes/:id",
            get(handlers::get_note)
                .patch(handlers::update_note)
                .delete(handlers::delete_note),
        )
        .fallback(handlers::route_not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
