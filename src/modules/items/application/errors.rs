use thiserror::Error;

use crate::modules::items::adapters::outbound::item_repository::RepositoryError;
use crate::modules::items::core::decide::DecideError;

#[derive(Debug, Error)]
pub enum ItemStoreError {
    #[error(transparent)]
    Validation(#[from] DecideError),

    #[error("item {id} not found")]
    NotFound { id: String },

    #[error(transparent)]
    Unexpected(#[from] RepositoryError),
}
