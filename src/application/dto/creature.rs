use chrono::SecondsFormat;
use serde::{Deserialize, Serialize};

use crate::application::services::CreateCreatureRequest;
use crate::domain::entities::{CreatureFeatures, CreatureRecord};
use crate::domain::value_objects::Vec3;

/// Body of a create call. Field names follow the client's camelCase.
///
/// Nothing beyond JSON syntax is checked here; the service decides, after
/// the caller is known, whether `userId` and `features` are acceptable.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCreatureRequestDto {
    pub user_id: String,
    #[serde(default)]
    pub features: serde_json::Value,
    #[serde(default)]
    pub position: Vec3,
    #[serde(default)]
    pub velocity: Vec3,
}

impl From<CreateCreatureRequestDto> for CreateCreatureRequest {
    fn from(dto: CreateCreatureRequestDto) -> Self {
        Self {
            user_id: dto.user_id,
            features: dto.features,
            position: dto.position,
            velocity: dto.velocity,
        }
    }
}

/// Canonical stored creature, as rendered by the scene
#[derive(Debug, Serialize)]
pub struct CreatureResponseDto {
    pub id: String,
    pub user_id: String,
    pub created_at: String,
    pub features: CreatureFeatures,
    pub position: Vec3,
    pub velocity: Vec3,
}

impl From<CreatureRecord> for CreatureResponseDto {
    fn from(r: CreatureRecord) -> Self {
        Self {
            id: r.id.to_string(),
            user_id: r.user_id.into(),
            created_at: r.created_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            features: r.features,
            position: r.position,
            velocity: r.velocity,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CreatureCountResponseDto {
    pub count: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_create_request_defaults_vectors_to_origin() {
        let dto: CreateCreatureRequestDto = serde_json::from_value(json!({
            "userId": "user_alice",
            "features": { "furPattern": "two-tone" }
        }))
        .unwrap();

        let request = CreateCreatureRequest::from(dto);
        assert_eq!(request.user_id, "user_alice");
        assert_eq!(request.position, Vec3::ORIGIN);
        assert_eq!(request.velocity, Vec3::ORIGIN);
        assert_eq!(request.features["furPattern"], "two-tone");
    }

    #[test]
    fn test_missing_features_left_for_the_service() {
        let dto: CreateCreatureRequestDto =
            serde_json::from_value(json!({ "userId": "" })).unwrap();
        let request = CreateCreatureRequest::from(dto);
        assert!(request.features.is_null());
        assert!(request.user_id.is_empty());
    }
}
