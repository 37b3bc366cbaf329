use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::Response,
};
use crate::error::ApiError;
use crate::routes::encode_json;
use crate::search::{self, SearchParams, SearchQuery};
use crate::store::PlayerStore;

// GET /api/players - List all players
pub async fn get_players(
    State(store): State<PlayerStore>,
) -> Result<Response, ApiError> {
    if store.is_empty() {
        return Err(ApiError::EmptyStore);
    }

    tracing::debug!("Returning all {} players", store.len());

    Ok(encode_json(StatusCode::OK, store.all()))
}

// GET /api/searchPlayers?q=sharma - Search by name or role
// GET /api/searchPlayers?name=rohit&role=batsman - Search by specific fields
pub async fn search_players(
    State(store): State<PlayerStore>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> Result<Response, ApiError> {
    let params = SearchParams::from_pairs(pairs);
    let query = SearchQuery::normalize(&params);

    tracing::debug!(
        q = %query.q,
        name = %query.name,
        role = %query.role,
        "Searching players"
    );

    let found = search::filter_players(store.all(), &query).inspect_err(|e| {
        tracing::debug!("Search rejected: {}", e);
    })?;

    tracing::debug!("Total matches found: {}", found.len());
    for player in &found {
        tracing::trace!("  - {} ({})", player.name, player.role);
    }

    Ok(encode_json(StatusCode::OK, &found))
}
