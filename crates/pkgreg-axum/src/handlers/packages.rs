//! Package handlers - index, detail and summary.

use axum::Json;
use axum::extract::{Path, Query, State};

use crate::error::HttpError;
use crate::state::AppState;
use pkgreg_core::{IndexQuery, PackageDetail, PackagePage, RegistrySummary};

/// One page of the package index.
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<IndexQuery>,
) -> Result<Json<PackagePage>, HttpError> {
    Ok(Json(state.core.registry().index(&query).await?))
}

/// A package and its versions.
pub async fn show(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<PackageDetail>, HttpError> {
    Ok(Json(state.core.registry().show(&name).await?))
}

/// Registry statistics and front-page lists.
pub async fn summary(State(state): State<AppState>) -> Result<Json<RegistrySummary>, HttpError> {
    Ok(Json(state.core.registry().summary().await?))
}
