use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::middleware;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::request_id_middleware;
use crate::presentation::handlers::{
    detailed_symptom_handler, health_handler, history_handler, symptom_handler, voice_handler,
};
use crate::presentation::state::AppState;

/// Builds the HTTP surface. Symptom routes are served both at the root and
/// under `/api` so the browser UI can call either form.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    let symptom_routes = Router::new()
        .route("/symptom", post(symptom_handler))
        .route("/detailed-symptom", post(detailed_symptom_handler))
        .route("/voice", post(voice_handler))
        .route("/history", get(history_handler));

    let max_body_bytes = state.settings.server.max_body_bytes;

    Router::new()
        .route("/health", get(health_handler))
        .merge(symptom_routes.clone())
        .nest("/api", symptom_routes)
        .layer(DefaultBodyLimit::max(max_body_bytes))
        .layer(middleware::from_fn(request_id_middleware))
        .layer(trace_layer)
        .layer(cors)
        .with_state(state)
}
