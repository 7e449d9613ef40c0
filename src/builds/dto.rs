use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

use crate::store::{Brick, Build};

/// Request body for saving a build. `user_id` stays optional so its
/// absence maps to the contract's 401 instead of a decode error.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveBuildRequest {
    #[serde(default)]
    pub user_id: Option<Uuid>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bricks: Vec<Brick>,
}

#[derive(Debug, Serialize)]
pub struct SaveBuildResponse {
    pub success: bool,
    pub id: Uuid,
}

/// Full build document as returned by history and load.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    pub bricks: Vec<Brick>,
}

impl From<Build> for BuildResponse {
    fn from(b: Build) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            name: b.name,
            created_at: b.created_at,
            bricks: b.bricks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_response_uses_camel_case_and_rfc3339() {
        let response = BuildResponse {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            name: Some("castle".to_string()),
            created_at: time::macros::datetime!(2026-01-15 12:30:00 UTC),
            bricks: vec![Brick {
                x: 1.0,
                y: 0.0,
                z: -2.5,
                width: 2.0,
                depth: 4.0,
                color: 0xAA3322,
                rotation: 90.0,
            }],
        };

        let json = serde_json::to_string(&response).unwrap();
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"createdAt\":\"2026-01-15T12:30:00Z\""));
        assert!(json.contains("\"rotation\":90.0"));
    }

    #[test]
    fn save_request_tolerates_missing_user_id_and_bricks() {
        let req: SaveBuildRequest = serde_json::from_str("{}").unwrap();
        assert!(req.user_id.is_none());
        assert!(req.bricks.is_empty());
    }
}
