pub mod mem;
pub mod pg;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// User record in the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String, // never exposed in JSON
    pub created_at: OffsetDateTime,
}

/// A single placed block inside a build. The server type-checks the
/// fields and nothing else; overlap and bounds are the client's concern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Brick {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub width: f64,
    pub depth: f64,
    pub color: i32, // packed RGB
    pub rotation: f64,
}

/// A saved collection of brick placements. Brick order is kept exactly
/// as submitted.
#[derive(Debug, Clone)]
pub struct Build {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: Option<String>,
    pub created_at: OffsetDateTime,
    pub bricks: Vec<Brick>,
}

/// Data-access seam. Handlers only see this trait, so tests can swap the
/// Postgres store for an in-memory one.
#[async_trait]
pub trait Store: Send + Sync {
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>>;

    async fn create_user(&self, username: &str, password_hash: &str) -> anyhow::Result<User>;

    async fn create_build(
        &self,
        user_id: Uuid,
        name: Option<String>,
        bricks: Vec<Brick>,
    ) -> anyhow::Result<Build>;

    /// Most recent builds for a user, newest first.
    async fn recent_builds_by_user(&self, user_id: Uuid, limit: i64)
        -> anyhow::Result<Vec<Build>>;

    async fn find_build(&self, id: Uuid) -> anyhow::Result<Option<Build>>;
}
