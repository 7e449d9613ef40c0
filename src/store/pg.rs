use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use time::OffsetDateTime;
use uuid::Uuid;

use super::{Brick, Build, Store, User};

pub struct PgStore {
    db: PgPool,
}

impl PgStore {
    pub fn new(db: PgPool) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct BuildRow {
    id: Uuid,
    user_id: Uuid,
    name: Option<String>,
    bricks: sqlx::types::Json<Vec<Brick>>,
    created_at: OffsetDateTime,
}

impl From<BuildRow> for Build {
    fn from(r: BuildRow) -> Self {
        Self {
            id: r.id,
            user_id: r.user_id,
            name: r.name,
            created_at: r.created_at,
            bricks: r.bricks.0,
        }
    }
}

#[async_trait]
impl Store for PgStore {
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, username, password_hash, created_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> anyhow::Result<User> {
        let user = sqlx::query_as::<_, User>(
            r#"
            INSERT INTO users (username, password_hash)
            VALUES ($1, $2)
            RETURNING id, username, password_hash, created_at
            "#,
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.db)
        .await?;
        Ok(user)
    }

    async fn create_build(
        &self,
        user_id: Uuid,
        name: Option<String>,
        bricks: Vec<Brick>,
    ) -> anyhow::Result<Build> {
        let row = sqlx::query_as::<_, BuildRow>(
            r#"
            INSERT INTO builds (user_id, name, bricks)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, bricks, created_at
            "#,
        )
        .bind(user_id)
        .bind(name)
        .bind(sqlx::types::Json(bricks))
        .fetch_one(&self.db)
        .await?;
        Ok(row.into())
    }

    async fn recent_builds_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> anyhow::Result<Vec<Build>> {
        let rows = sqlx::query_as::<_, BuildRow>(
            r#"
            SELECT id, user_id, name, bricks, created_at
            FROM builds
            WHERE user_id = $1
            ORDER BY created_at DESC
            LIMIT $2
            "#,
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(&self.db)
        .await?;
        Ok(rows.into_iter().map(Build::from).collect())
    }

    async fn find_build(&self, id: Uuid) -> anyhow::Result<Option<Build>> {
        let row = sqlx::query_as::<_, BuildRow>(
            r#"
            SELECT id, user_id, name, bricks, created_at
            FROM builds
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(row.map(Build::from))
    }
}
