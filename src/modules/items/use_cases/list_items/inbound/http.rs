use axum::{Json, extract::State, response::IntoResponse};

use crate::shared::http::envelope::{ApiError, Envelope};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> impl IntoResponse {
    match state.items.list().await {
        Ok(items) => Json(Envelope::data(items)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
