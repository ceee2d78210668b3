//! JSON API over the catalog, mirroring the accessor contract.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use marvel_core::{prepare_data, Character, CharacterId, SortOptions, Stat};
use serde::Deserialize;

use super::load_characters;
use crate::AppState;

#[derive(Deserialize)]
pub struct ListQuery {
    pub sort: Option<String>,
    pub order: Option<String>,
}

/// GET /api/v1/health – liveness check.
pub async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({ "status": "ok" }))
}

/// GET /api/v1/characters?sort=&order=
pub async fn list_characters(
    State(state): State<AppState>,
    Query(query): Query<ListQuery>,
) -> Json<Vec<Character>> {
    let options = SortOptions::from_query(query.sort.as_deref(), query.order.as_deref());
    Json(load_characters(state.catalog.as_ref(), options))
}

/// GET /api/v1/characters/:id – the record, `null` for a malformed store, 404 when absent.
pub async fn get_character(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.catalog.get_character(&CharacterId::from(id)) {
        Ok(found) => Json(found).into_response(),
        Err(e) => {
            let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::NOT_FOUND);
            (
                status,
                Json(serde_json::json!({ "status": "error", "message": e.to_string() })),
            )
                .into_response()
        }
    }
}

/// GET /api/v1/characters/:id/capacities – prepared pie data.
pub async fn get_capacities(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match super::load_character(state.catalog.as_ref(), &id) {
        Ok(character) => {
            let data: Vec<Stat> = prepare_data(character.capacities().as_ref());
            Json(data).into_response()
        }
        Err(e) => (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "status": "error", "message": e.to_string() })),
        )
            .into_response(),
    }
}
