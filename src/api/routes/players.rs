use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::models::Player;

#[derive(Debug, Serialize)]
pub struct PlayersResponse {
    pub players: Vec<Player>,
}

/// Sort players by ascending rank. Equal ranks keep their dataset order.
pub fn sort_by_rank(players: &mut [Player]) {
    players.sort_by_key(|p| p.data.rank);
}

/// First player with the given id.
pub fn find_by_id(players: Vec<Player>, id: i64) -> Option<Player> {
    players.into_iter().find(|p| p.id == id)
}

/// GET /getPlayers
pub async fn list_players(
    State(state): State<AppState>,
) -> Result<Json<PlayersResponse>, ApiError> {
    let mut players = state.storage.players().read_all()?;
    sort_by_rank(&mut players);

    Ok(Json(PlayersResponse { players }))
}

/// GET /getPlayer/:id
///
/// Ids are integers; a segment that does not parse as one cannot match any
/// player and is reported as not found.
pub async fn get_player(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<Player>, ApiError> {
    let not_found = || ApiError::NotFound(format!("No player found with id {}", raw_id));

    let id: i64 = raw_id.parse().map_err(|_| not_found())?;
    let players = state.storage.players().read_all()?;

    find_by_id(players, id).map(Json).ok_or_else(not_found)
}
