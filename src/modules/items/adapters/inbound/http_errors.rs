use axum::http::StatusCode;

use crate::modules::items::application::errors::ItemStoreError;
use crate::shared::http::envelope::ApiError;

impl From<ItemStoreError> for ApiError {
    fn from(error: ItemStoreError) -> Self {
        match error {
            ItemStoreError::Validation(reason) => {
                ApiError::new(StatusCode::BAD_REQUEST, reason.to_string())
            }
            ItemStoreError::NotFound { .. } => {
                ApiError::new(StatusCode::NOT_FOUND, "Item not found")
            }
            ItemStoreError::Unexpected(cause) => {
                tracing::error!(error = %cause, "item store failure");
                ApiError::internal()
            }
        }
    }
}
