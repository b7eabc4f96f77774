use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shared::http::envelope::{ApiError, Envelope};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> impl IntoResponse {
    match state.items.get(&id).await {
        Ok(item) => Json(Envelope::data(item)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
