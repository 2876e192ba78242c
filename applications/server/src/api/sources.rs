/// Song source API routes
///
/// Lists the catalogs the playlist was seeded from.
use crate::state::AppState;
use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

/// Song source for API responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceResponse {
    pub name: String,
    pub songs: Vec<String>,
}

/// GET /api/sources - Registered sources and their catalogs
pub async fn list_sources(State(app_state): State<AppState>) -> Json<Vec<SourceResponse>> {
    let sources = app_state
        .registry
        .iter()
        .map(|source| SourceResponse {
            name: source.name().to_string(),
            songs: source.catalog().to_vec(),
        })
        .collect();

    Json(sources)
}
