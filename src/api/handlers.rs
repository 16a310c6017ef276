use std::collections::BTreeMap;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    i18n::{self, Locale},
};

use super::state::{AppState, CatalogSnapshot};

#[derive(Debug, Deserialize)]
pub struct CatalogQuery {
    /// ISO 3166-1 region for watch-provider availability
    pub region: Option<String>,
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// The aggregated catalog for a region, cached between requests
pub async fn get_movies(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogSnapshot> {
    let region = resolve_region(&state, query.region.as_deref());
    Json(state.catalog_for(&region).await)
}

/// Forces a pipeline re-run, replacing the cached snapshot
pub async fn refresh_movies(
    State(state): State<AppState>,
    Query(query): Query<CatalogQuery>,
) -> Json<CatalogSnapshot> {
    let region = resolve_region(&state, query.region.as_deref());
    Json(state.refresh(&region).await)
}

/// Flattened UI string table for a locale
pub async fn get_strings(
    Path(locale): Path<String>,
) -> AppResult<Json<BTreeMap<String, String>>> {
    let locale = Locale::parse(&locale)
        .ok_or_else(|| AppError::NotFound(format!("Unsupported locale: {}", locale)))?;
    Ok(Json(i18n::table(locale)))
}

fn resolve_region(state: &AppState, requested: Option<&str>) -> String {
    requested
        .map(str::trim)
        .filter(|region| !region.is_empty())
        .unwrap_or(&state.default_region)
        .to_uppercase()
}
