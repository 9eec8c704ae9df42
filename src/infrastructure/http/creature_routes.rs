//! Creature API routes
//!
//! `{kind}` is `unicorns`, `llamas` or `cats`. The caller identity comes from
//! [`HeaderIdentity`]; all authorization decisions are made by the services.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::application::dto::{
    CreateCreatureRequestDto, CreatureCountResponseDto, CreatureResponseDto,
};
use crate::application::services::{CreateCreatureRequest, CreatureError, CreatureGateway};
use crate::domain::entities::{CreatureFeatures, CreatureKind};
use crate::domain::value_objects::{CreatureId, UserId};
use crate::infrastructure::auth::HeaderIdentity;
use crate::infrastructure::state::AppState;

type ApiError = (StatusCode, String);

fn parse_kind(kind: &str) -> Result<CreatureKind, ApiError> {
    kind.parse()
        .map_err(|_| (StatusCode::BAD_REQUEST, format!("Unknown creature kind: {}", kind)))
}

fn parse_user_id(user_id: String) -> Result<UserId, ApiError> {
    UserId::parse(user_id).map_err(|e| (StatusCode::BAD_REQUEST, format!("Invalid user ID: {}", e)))
}

fn error_response(e: CreatureError) -> ApiError {
    match e {
        CreatureError::Unauthorized(_) => (StatusCode::UNAUTHORIZED, e.to_string()),
        CreatureError::NotFound { .. } => (StatusCode::NOT_FOUND, e.to_string()),
        CreatureError::Validation(_) => (StatusCode::BAD_REQUEST, e.to_string()),
        CreatureError::StorageFailure(_) => {
            tracing::error!("{}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                "Something went wrong, please try again".to_string(),
            )
        }
    }
}

/// Random features for a kind, without saving anything
pub async fn random_features(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
) -> Result<Json<CreatureFeatures>, ApiError> {
    let kind = parse_kind(&kind)?;
    Ok(Json(
        state.creatures(kind).random_features(state.random.as_ref()),
    ))
}

/// Create a creature from client-supplied features
pub async fn create_creature(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    identity: HeaderIdentity,
    Json(req): Json<CreateCreatureRequestDto>,
) -> Result<(StatusCode, Json<CreatureResponseDto>), ApiError> {
    let kind = parse_kind(&kind)?;

    let record = state
        .creatures(kind)
        .create(&identity, CreateCreatureRequest::from(req))
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(CreatureResponseDto::from(record))))
}

/// Generate and create a creature for the caller
pub async fn spawn_creature(
    State(state): State<Arc<AppState>>,
    Path(kind): Path<String>,
    identity: HeaderIdentity,
) -> Result<(StatusCode, Json<CreatureResponseDto>), ApiError> {
    let kind = parse_kind(&kind)?;

    let record = state
        .creatures(kind)
        .spawn(&identity, state.random.as_ref())
        .await
        .map_err(error_response)?;

    Ok((StatusCode::CREATED, Json(CreatureResponseDto::from(record))))
}

/// List a user's creatures, newest first
pub async fn list_creatures(
    State(state): State<Arc<AppState>>,
    Path((kind, user_id)): Path<(String, String)>,
    identity: HeaderIdentity,
) -> Result<Json<Vec<CreatureResponseDto>>, ApiError> {
    let kind = parse_kind(&kind)?;
    let user_id = parse_user_id(user_id)?;

    let records = state
        .creatures(kind)
        .list_by_user(&identity, &user_id)
        .await
        .map_err(error_response)?;

    Ok(Json(
        records.into_iter().map(CreatureResponseDto::from).collect(),
    ))
}

/// Count a user's creatures
pub async fn count_creatures(
    State(state): State<Arc<AppState>>,
    Path((kind, user_id)): Path<(String, String)>,
    identity: HeaderIdentity,
) -> Result<Json<CreatureCountResponseDto>, ApiError> {
    let kind = parse_kind(&kind)?;
    let user_id = parse_user_id(user_id)?;

    let count = state
        .creatures(kind)
        .count_by_user(&identity, &user_id)
        .await
        .map_err(error_response)?;

    Ok(Json(CreatureCountResponseDto { count }))
}

/// Delete one of the caller's creatures
pub async fn delete_creature(
    State(state): State<Arc<AppState>>,
    Path((kind, id)): Path<(String, String)>,
    identity: HeaderIdentity,
) -> Result<StatusCode, ApiError> {
    let kind = parse_kind(&kind)?;
    let uuid = Uuid::parse_str(&id)
        .map_err(|_| (StatusCode::BAD_REQUEST, format!("Invalid {} ID", kind)))?;

    state
        .creatures(kind)
        .delete_by_id(&identity, CreatureId::from_uuid(uuid))
        .await
        .map_err(error_response)?;

    Ok(StatusCode::NO_CONTENT)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{body::Body, http::Request, Router};
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use crate::infrastructure::config::AppConfig;
    use crate::infrastructure::http::create_routes;
    use crate::infrastructure::persistence::SqliteDatabase;
    use crate::infrastructure::random::SeededRandom;

    async fn create_test_app() -> Router {
        let database = SqliteDatabase::in_memory().await.unwrap();
        let state = AppState::with_repository(
            AppConfig::default(),
            Arc::new(database.creatures()),
            Arc::new(SeededRandom::new(31)),
        );
        create_routes().with_state(Arc::new(state))
    }

    async fn send(
        app: &Router,
        method: &str,
        uri: &str,
        user: Option<&str>,
        body: Option<Value>,
    ) -> (StatusCode, Value) {
        let mut builder = Request::builder().method(method).uri(uri);
        if let Some(user) = user {
            builder = builder.header("X-User-Id", user);
        }
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
    }

    #[tokio::test]
    async fn test_spawn_list_count_delete_flow() {
        let app = create_test_app().await;

        let (status, created) = send(&app, "POST", "/api/unicorns/spawn", Some("user_alice"), None).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["user_id"], "user_alice");
        assert!(created["features"]["hairStyle"].is_string());
        assert!(created["created_at"].as_str().unwrap().ends_with('Z'));
        let id = created["id"].as_str().unwrap().to_string();

        let (status, listed) = send(&app, "GET", "/api/unicorns/by-user/user_alice", Some("user_alice"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(listed.as_array().unwrap().len(), 1);
        assert_eq!(listed[0]["id"], id.as_str());

        let (status, count) = send(&app, "GET", "/api/unicorns/by-user/user_alice/count", Some("user_alice"), None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(count, json!({ "count": 1 }));

        let uri = format!("/api/unicorns/{}", id);
        let (status, _) = send(&app, "DELETE", &uri, Some("user_bob"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, "DELETE", &uri, Some("user_alice"), None).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(&app, "DELETE", &uri, Some("user_alice"), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_listing_someone_else_is_unauthorized() {
        let app = create_test_app().await;

        let (status, _) = send(&app, "GET", "/api/cats/by-user/user_alice", Some("user_bob"), None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, "GET", "/api/cats/by-user/user_alice/count", None, None).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_with_client_features() {
        let app = create_test_app().await;

        let (status, features) = send(&app, "GET", "/api/llamas/features/random", None, None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(features["furPattern"].is_string());

        let body = json!({
            "userId": "user_alice",
            "features": features,
            "position": { "x": 1.0, "y": 2.0, "z": 3.0 },
            "velocity": { "x": 0.0, "y": -1.0, "z": 0.0 }
        });
        let (status, created) = send(&app, "POST", "/api/llamas", Some("user_alice"), Some(body.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(created["features"], features);
        assert_eq!(created["position"], json!({ "x": 1.0, "y": 2.0, "z": 3.0 }));

        // Same body, different caller
        let (status, _) = send(&app, "POST", "/api/llamas", Some("user_mallory"), Some(body)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_create_rejects_features_outside_pools() {
        let app = create_test_app().await;

        let body = json!({
            "userId": "user_alice",
            "features": {
                "colorPalette": { "body": "#F5F5F5", "ears": "#FFB6C1", "paws": "#FFFFFF", "eyes": "#FF0000" },
                "accessories": { "bell": "gold" },
                "furPattern": "calico",
                "size": 1.1
            }
        });
        let (status, _) = send(&app, "POST", "/api/cats", Some("user_alice"), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_create_checks_caller_before_feature_shape() {
        let app = create_test_app().await;
        let body = json!({ "userId": "user_alice", "features": { "bogus": 1 } });

        let (status, _) = send(&app, "POST", "/api/cats", None, Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, "POST", "/api/cats", Some("user_bob"), Some(body.clone())).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);

        let (status, _) = send(&app, "POST", "/api/cats", Some("user_alice"), Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_unknown_kind_and_bad_id() {
        let app = create_test_app().await;

        let (status, _) = send(&app, "POST", "/api/dragons/spawn", Some("user_alice"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "DELETE", "/api/cats/not-a-uuid", Some("user_alice"), None).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }
}
