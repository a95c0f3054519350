//! HTTP gateway (Axum): routes, shared state, payloads, error mapping, and
//! the inlined UI page.

pub mod error;
pub mod handler;
pub mod payload;
pub mod state;


use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, Method, StatusCode, header::HeaderValue},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub use error::GatewayError;
pub use handler::{ask_handler, score_handler};
pub use state::AppState;

use crate::constants::{SYNAPSE_STATUS_HEADER, SYNAPSE_STATUS_OK};
use crate::provider::CompletionBackend;
use payload::HealthResponse;

static INDEX_HTML: &str = include_str!("index.html");

pub fn create_router<P: CompletionBackend + 'static>(state: AppState<P>) -> Router {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST])
        .allow_origin(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/healthz", get(health_handler))
        .route("/api/search", post(ask_handler))
        .route("/api/score", post(score_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index_handler() -> Html<&'static str> {
    Html(INDEX_HTML)
}

#[tracing::instrument(skip(state))]
async fn health_handler<P: CompletionBackend + 'static>(
    State(state): State<AppState<P>>,
) -> Response {
    let mut headers = HeaderMap::new();
    headers.insert(
        SYNAPSE_STATUS_HEADER,
        HeaderValue::from_static(SYNAPSE_STATUS_OK),
    );

    (
        StatusCode::OK,
        headers,
        Json(HealthResponse {
            status: "ok",
            gemini_configured: state.gemini_configured,
        }),
    )
        .into_response()
}
