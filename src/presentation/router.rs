use std::path::Path;

use axum::Router;
use axum::body::Body;
use axum::extract::DefaultBodyLimit;
use axum::http::Request;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::{DefaultOnResponse, TraceLayer};
use tracing::Level;

use crate::infrastructure::observability::{MakeRequestUuid, request_id_header, request_span};
use crate::presentation::handlers::{health_handler, transcribe_handler};
use crate::presentation::state::AppState;

pub fn create_router(state: AppState) -> Router {
    let server = state.settings.server.clone();
    let static_dir = Path::new(&server.static_dir);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let trace_layer = TraceLayer::new_for_http()
        .make_span_with(|request: &Request<Body>| request_span(request))
        .on_response(DefaultOnResponse::new().level(Level::INFO));

    Router::new()
        .route_service("/", ServeFile::new(static_dir.join("index.html")))
        .route("/health", get(health_handler))
        .route(
            "/transcribe",
            post(transcribe_handler).layer(DefaultBodyLimit::max(server.max_upload_bytes())),
        )
        .fallback_service(ServeDir::new(static_dir))
        .layer(PropagateRequestIdLayer::new(request_id_header()))
        .layer(trace_layer)
        .layer(SetRequestIdLayer::new(request_id_header(), MakeRequestUuid))
        .layer(cors)
        .with_state(state)
}
