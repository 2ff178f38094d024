//! swarcure-server
//!
//! HTTP surface over the assessment engine, storage, and progress tracker.

use axum::Router;
use axum::middleware as axum_mw;
use axum::routing::get;
use tower_http::cors::{Any, CorsLayer};

pub mod config;
mod error;
mod extract;
mod middleware;
mod routes;
pub mod state;
pub mod telemetry;

use state::AppState;

pub fn app(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(routes::health::health_check))
        // Public catalog data
        .route(
            "/questionnaire",
            get(routes::questionnaire::get_questionnaire),
        )
        .route(
            "/recommendations",
            get(routes::recommendations::get_recommendation),
        )
        .route("/music/{condition}", get(routes::music::get_music))
        // Per-user records
        .route(
            "/users/{user_id}/assessments",
            get(routes::assessments::list_assessments).post(routes::assessments::submit_assessment),
        )
        .route(
            "/users/{user_id}/assessments/latest",
            get(routes::assessments::get_latest_assessment),
        )
        .route(
            "/users/{user_id}/progress",
            get(routes::progress::list_progress).post(routes::progress::log_session),
        )
        .route(
            "/users/{user_id}/progress/stats",
            get(routes::progress::get_stats),
        )
        .layer(axum_mw::from_fn(middleware::request_log::request_log))
        .layer(cors)
        .with_state(state)
}
