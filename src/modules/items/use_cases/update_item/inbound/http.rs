use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    response::IntoResponse,
};

use crate::modules::items::core::changes::ItemChanges;
use crate::shared::http::envelope::{ApiError, Envelope};
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<ItemChanges>, JsonRejection>,
) -> impl IntoResponse {
    let Json(changes) = match body {
        Ok(b) => b,
        Err(JsonRejection::MissingJsonContentType(_)) => Json(ItemChanges::default()),
        Err(rejection) => return ApiError::from(rejection).into_response(),
    };

    match state.items.update(&id, changes).await {
        Ok(item) => Json(Envelope::data(item)).into_response(),
        Err(e) => ApiError::from(e).into_response(),
    }
}

#[cfg(test)]
mod update_item_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use rstest::rstest;
    use tower::ServiceExt;

    use crate::modules::items::core::item::Item;
    use crate::shell::state::AppState;
    use crate::tests::fixtures::items::{CreateItemBuilder, make_offline_state, make_test_state};

    use super::handle;

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/items/{id}", put(handle))
            .with_state(state)
    }

    fn put_item(id: &str, body: &'static str) -> Request<Body> {
        Request::put(format!("/items/{id}"))
            .header("content-type", "application/json")
            .body(Body::from(body))
            .unwrap()
    }

    async fn seeded() -> (AppState, Item) {
        let state = make_test_state();
        let created = state
            .items
            .create(CreateItemBuilder::new().build())
            .await
            .unwrap();
        (state, created)
    }

    #[tokio::test]
    async fn it_should_return_200_and_only_change_purchased() {
        let (state, created) = seeded().await;

        let response = app(state.clone())
            .oneshot(put_item(&created.id, r#"{"purchased":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["data"],
            serde_json::json!({"id": created.id, "name": "Milk", "quantity": 2, "purchased": true})
        );
        assert!(state.items.get(&created.id).await.unwrap().purchased);
    }

    #[tokio::test]
    async fn it_should_apply_name_and_quantity_and_skip_falsy_values() {
        let (state, created) = seeded().await;

        let response = app(state.clone())
            .oneshot(put_item(&created.id, r#"{"name":"Oat milk","quantity":0}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let stored = state.items.get(&created.id).await.unwrap();
        assert_eq!(stored.name, "Oat milk");
        assert_eq!(stored.quantity, created.quantity);
    }

    #[rstest]
    #[case(r#"{}"#)]
    #[case(r#"{"name":"","quantity":0}"#)]
    #[case(r#"{"unknown":"field"}"#)]
    #[tokio::test]
    async fn it_should_return_400_when_no_field_is_given(#[case] body: &'static str) {
        let (state, created) = seeded().await;

        let response = app(state.clone())
            .oneshot(put_item(&created.id, body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["error"],
            "At least one field (name, quantity, or purchased) must be provided"
        );
        assert_eq!(state.items.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn it_should_return_404_when_the_item_does_not_exist() {
        let response = app(make_test_state())
            .oneshot(put_item("does-not-exist", r#"{"purchased":false}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn it_should_return_400_on_invalid_json() {
        let (state, created) = seeded().await;

        let response = app(state)
            .oneshot(put_item(&created.id, r#"{"purchased":"yes"}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn it_should_treat_a_body_without_json_content_type_as_empty() {
        let (state, created) = seeded().await;

        let response = app(state.clone())
            .oneshot(
                Request::put(format!("/items/{}", created.id))
                    .body(Body::from(r#"{"purchased":true}"#))
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json["error"],
            "At least one field (name, quantity, or purchased) must be provided"
        );
        assert_eq!(state.items.get(&created.id).await.unwrap(), created);
    }

    #[tokio::test]
    async fn it_should_return_500_when_the_repository_is_offline() {
        let response = app(make_offline_state())
            .oneshot(put_item("any", r#"{"purchased":true}"#))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"data": null, "error": "Internal server error"})
        );
    }
}
