use axum::{Json, Router, routing::get};
use serde::Serialize;
use tower_http::trace::TraceLayer;

use crate::modules::items::use_cases::create_item::inbound::http as create_http;
use crate::modules::items::use_cases::delete_item::inbound::http as delete_http;
use crate::modules::items::use_cases::get_item::inbound::http as get_http;
use crate::modules::items::use_cases::list_items::inbound::http as list_http;
use crate::modules::items::use_cases::update_item::inbound::http as update_http;
use crate::shared::http::envelope::Envelope;
use crate::shell::state::AppState;

pub const ROOT_MESSAGE: &str = "Shopping List API is running!";

#[derive(Serialize)]
pub struct RootMessage {
    pub message: &'static str,
}

pub async fn root() -> Json<Envelope<RootMessage>> {
    Json(Envelope::data(RootMessage {
        message: ROOT_MESSAGE,
    }))
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/items", get(list_http::handle).post(create_http::handle))
        .route(
            "/items/{id}",
            get(get_http::handle)
                .put(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
