use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;
use crate::tts::store::OUTPUT_ROUTE;

pub fn create_routes(state: &AppState) -> Router<AppState> {
    Router::new()
        // Health check
        .route("/api/health", get(handlers::health_check))

        // Pipeline actions
        .route("/api/news/search", post(handlers::search_news))
        .route("/api/headlines", get(handlers::list_headlines))
        .route("/api/headlines/digest", post(handlers::digest_headlines))
        .route("/api/speech", post(handlers::synthesize_speech))
        .route("/api/voices", get(handlers::list_voices))

        // Synthesized audio
        .nest_service(OUTPUT_ROUTE, ServeDir::new(state.config.system.output_path()))
}

/// Full application with middleware, ready to serve
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .merge(create_routes(&state))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
