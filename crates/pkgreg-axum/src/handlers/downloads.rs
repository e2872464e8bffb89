//! Download handler - counts a download and points at the tarball.

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::HttpError;
use crate::state::AppState;

/// JSON answer for clients that resolve the URL themselves.
#[derive(Debug, Serialize)]
pub struct DownloadResponse {
    pub ok: bool,
    pub url: String,
}

/// Whether the client asked for JSON instead of a redirect.
fn wants_json(headers: &HeaderMap) -> bool {
    headers
        .get_all(header::ACCEPT)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .any(|v| v.contains("application/json"))
}

/// Count a download of `filename` and send the client to the tarball.
///
/// Answers `{ ok, url }` to JSON clients and a `302 Found` otherwise.
pub async fn download(
    State(state): State<AppState>,
    Path((name, filename)): Path<(String, String)>,
    headers: HeaderMap,
) -> Result<Response, HttpError> {
    let url = state.core.registry().download(&name, &filename).await?;

    if wants_json(&headers) {
        Ok(Json(DownloadResponse { ok: true, url }).into_response())
    } else {
        Ok((StatusCode::FOUND, [(header::LOCATION, url)]).into_response())
    }
}
