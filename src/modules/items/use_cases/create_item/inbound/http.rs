use axum::{
    Json, extract::State, extract::rejection::JsonRejection, http::StatusCode,
    response::IntoResponse,
};

use crate::modules::items::core::decide::CreateItem;
use crate::shared::http::envelope::{ApiError, Envelope};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    body: Result<Json<CreateItem>, JsonRejection>,
) -> impl IntoResponse {
    let Json(command) = match body {
        Ok(b) => b,
        Err(JsonRejection::MissingJsonContentType(_)) => Json(CreateItem::default()),
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match state.items.create(command).await {
        Ok(item) => (StatusCode::CREATED, Json(Envelope::data(item))).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}
