//! Flashcard HTTP server
//!
//! Axum router exposing flashcard generation, premium checkout and the
//! static single-page frontend.

pub mod config;
pub mod handlers;
pub mod state;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

use crate::handlers::{
    create_checkout, generate_flashcards, health_check, payment_cancelled, payment_success,
};
pub use crate::config::{AppConfig, QaBackend};
pub use crate::state::AppState;

/// Build the application router
pub fn router(state: AppState) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let static_files = ServeDir::new(&state.config.static_dir);

    Router::new()
        // Health & info
        .route("/health", get(health_check))

        // Flashcards
        .route("/generate_flashcards", post(generate_flashcards))

        // Payments
        .route("/create_checkout", post(create_checkout))
        .route("/success", get(payment_success))
        .route("/cancel", get(payment_cancelled))

        // Static files (WASM frontend)
        .fallback_service(static_files)

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
