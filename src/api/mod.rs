pub mod health;
pub mod matches;

use crate::compile::ScorecardCache;
use crate::config::Config;
use crate::db::Repository;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<Repository>,
    pub config: Config,
    pub cache: Arc<ScorecardCache>,
}

impl AppState {
    pub fn new(repo: Arc<Repository>, config: Config) -> Self {
        let cache = Arc::new(ScorecardCache::new(config.scorecard_cache_capacity));
        Self { repo, config, cache }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route("/v1/matches", get(matches::list_matches))
        .route("/v1/matches/:id/scorecard", get(matches::get_scorecard))
        .route("/v1/matches/:id/highlights", get(matches::get_highlights))
        .route("/v1/matches/:id/run-rate", get(matches::get_run_rate))
        .layer(cors)
        .with_state(state)
}
