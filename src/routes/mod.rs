use crate::config::Config;
use crate::session_factory::actor_client::SessionFactoryClient;
use axum::routing::{get, post};
use axum::Router;
use std::sync::Arc;
use tower_http::cors::CorsLayer;

mod health;
mod metrics;
mod session;

pub fn create_router(config: &Config) -> Router<Arc<SessionFactoryClient>> {
    Router::new()
        .route("/health", get(health::get))
        .route("/metrics", get(metrics::metrics_handler))
        .route("/session", post(session::create))
        .route("/session/:session_id", get(session::get))
        .route("/session/:session_id/guess", post(session::submit_word))
        .route("/session/:session_id/skip", post(session::skip_word))
        .route(
            "/session/:session_id/summary",
            post(session::choose_summary_option),
        )
        .layer(if config.allow_cors {
            log::info!("CorsLayer Permissive");
            CorsLayer::permissive()
        } else {
            CorsLayer::default()
        })
}
