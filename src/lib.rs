pub mod config;
pub mod error;
pub mod handlers;
pub mod profile;
pub mod state;

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::state::AppState;

/// Build the application router.
pub fn app(state: Arc<AppState>) -> Router {
    let static_dir = state.config.static_dir.clone();

    Router::new()
        .route("/", get(handlers::index))
        .route("/health", get(handlers::health_check))
        .route("/api/portfolio", get(handlers::get_portfolio))
        .route("/api/experience", get(handlers::get_experience))
        .route("/api/skills", get(handlers::get_skills))
        .route("/api/education", get(handlers::get_education))
        .route("/api/certifications", get(handlers::get_certifications))
        .route("/api/projects", get(handlers::get_projects))
        .nest_service("/static", ServeDir::new(static_dir))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
