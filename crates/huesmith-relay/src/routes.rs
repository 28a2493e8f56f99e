//! Relay route handlers

use crate::RelayState;
use axum::Json;
use axum::body::{Body, Bytes};
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use futures::StreamExt;
use huesmith_core::config::CREDENTIAL_COOKIE;
use huesmith_core::error::HuesmithError;
use huesmith_core::llm::prompt;
use huesmith_core::types::PaletteRequest;
use serde_json::json;
use tower_http::cors::CorsLayer;
use tracing::{info, warn};

/// Build the relay router
pub fn router(state: RelayState) -> axum::Router {
    axum::Router::new()
        .route("/api/palette", post(generate_palette))
        .route("/healthz", get(healthz))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn healthz() -> impl IntoResponse {
    Json(json!({ "status": "ok" }))
}

/// Relay a palette request to the completion provider
///
/// The credential arrives in a cookie and is forwarded per request; the
/// relay stores nothing. On success the provider's token stream becomes the
/// response body unmodified. Any upstream failure becomes a 500 carrying the
/// raw payload; there are no retries.
async fn generate_palette(
    State(state): State<RelayState>,
    headers: HeaderMap,
    Json(request): Json<PaletteRequest>,
) -> Response {
    let Some(token) = cookie_value(&headers, CREDENTIAL_COOKIE) else {
        return (StatusCode::BAD_REQUEST, "No token was provided").into_response();
    };

    let messages = prompt::build_messages(&request);
    match state.client.stream_chat(&token, &messages).await {
        Ok(tokens) => {
            info!(colors = request.colors.len(), "palette stream opened");
            let body = Body::from_stream(tokens.map(|token| token.map(Bytes::from)));
            Response::builder()
                .status(StatusCode::OK)
                .header(header::CONTENT_TYPE, "text/plain; charset=utf-8")
                .body(body)
                .unwrap_or_else(|_| StatusCode::INTERNAL_SERVER_ERROR.into_response())
        }
        Err(e) => {
            warn!(error = %e, "upstream call failed");
            let payload = match e {
                HuesmithError::Upstream { body, .. } if !body.is_empty() => body,
                other => other.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, payload).into_response()
        }
    }
}

/// Pull one cookie's value out of the Cookie header
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    raw.split(';').find_map(|pair| {
        let (key, value) = pair.trim().split_once('=')?;
        (key == name && !value.is_empty()).then(|| value.to_string())
    })
}
