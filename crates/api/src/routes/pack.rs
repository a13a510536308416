use axum::{
    extract::{rejection::QueryRejection, Query, State},
    routing::get,
    Json, Router,
};
use serde::{Deserialize, Serialize};

use pack_opener_runtime::{Card, DEFAULT_PACK_SIZE};

use crate::response::AppError;
use crate::GlobalState;

pub fn pack_routes() -> Router<GlobalState> {
    Router::new()
        .route("/api/open-pack", get(open_pack))
}

#[derive(Debug, Deserialize)]
pub struct OpenPackQuery {
    size: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct OpenPackResponse {
    pub pack: Vec<Card>,
}

async fn open_pack(
    State(state): State<GlobalState>,
    query: Result<Query<OpenPackQuery>, QueryRejection>,
) -> Result<Json<OpenPackResponse>, AppError> {
    let Query(query) = query.map_err(AppError::unprocessable)?;
    let size = query.size.unwrap_or(DEFAULT_PACK_SIZE);

    let pack = state.open_pack(size)?;
    tracing::debug!(
        "[/api/open-pack] opened {} cards, best {:?}, forced {:?}",
        pack.len(), pack.best_rarity(), pack.forced_index()
    );

    Ok(Json(OpenPackResponse { pack: pack.into_cards() }))
}
