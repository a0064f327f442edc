use axum::{
    Json,
    body::Bytes,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::models::SearchResponse;

use super::ForwardState;

/// Relays a form submission to the upstream text API as-is and hands its
/// status and body back unchanged.
pub async fn forward_handler(
    State(state): State<Arc<ForwardState>>,
    body: Bytes,
) -> Result<Response, (StatusCode, Json<SearchResponse>)> {
    let Some(upstream) = state.upstream() else {
        return Err((
            StatusCode::SERVICE_UNAVAILABLE,
            Json(SearchResponse::failure("No upstream text API configured")),
        ));
    };

    log::info!("forwarding {} byte request to {}", body.len(), upstream);

    let res = state
        .client()
        .post(upstream.clone())
        .header(header::CONTENT_TYPE, "application/json")
        .body(body)
        .send()
        .await
        .map_err(|e| {
            log::error!("upstream request failed: {e:#}");
            (
                StatusCode::BAD_GATEWAY,
                Json(SearchResponse::failure(format!("Upstream error: {}", e))),
            )
        })?;

    let status = StatusCode::from_u16(res.status().as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
    let body = res.text().await.map_err(|e| {
        (
            StatusCode::BAD_GATEWAY,
            Json(SearchResponse::failure(format!("Upstream error: {}", e))),
        )
    })?;

    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}
