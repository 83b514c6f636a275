use axum::extract::State;
use axum::Json;

use crate::api::state::AppState;
use crate::api::ApiError;
use crate::calculate::aggregate;
use crate::models::DatasetStats;

/// GET /getStats
///
/// `averageIMC` is the mean over players with a positive height. Players
/// without one still count toward the country ratios and the median height.
pub async fn get_stats(State(state): State<AppState>) -> Result<Json<DatasetStats>, ApiError> {
    let players = state.storage.players().read_all()?;
    let stats = aggregate(&players)?;

    tracing::debug!(
        "Computed stats over {} players, best country {}",
        players.len(),
        stats.best_country
    );

    Ok(Json(stats))
}
