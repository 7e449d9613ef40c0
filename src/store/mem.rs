use std::sync::Mutex;

use async_trait::async_trait;
use time::OffsetDateTime;
use uuid::Uuid;

use super::{Brick, Build, Store, User};

/// In-memory store backing `AppState::fake()`. Mirrors the behavior the
/// Postgres schema enforces, including the unique index on usernames.
#[derive(Default)]
pub struct MemStore {
    users: Mutex<Vec<User>>,
    builds: Mutex<Vec<Build>>,
}

#[async_trait]
impl Store for MemStore {
    async fn find_user_by_username(&self, username: &str) -> anyhow::Result<Option<User>> {
        let users = self.users.lock().expect("users lock poisoned");
        Ok(users.iter().find(|u| u.username == username).cloned())
    }

    async fn create_user(&self, username: &str, password_hash: &str) -> anyhow::Result<User> {
        let mut users = self.users.lock().expect("users lock poisoned");
        if users.iter().any(|u| u.username == username) {
            anyhow::bail!("duplicate key value violates unique constraint \"users_username_key\"");
        }
        let user = User {
            id: Uuid::new_v4(),
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: OffsetDateTime::now_utc(),
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn create_build(
        &self,
        user_id: Uuid,
        name: Option<String>,
        bricks: Vec<Brick>,
    ) -> anyhow::Result<Build> {
        let mut builds = self.builds.lock().expect("builds lock poisoned");
        let build = Build {
            id: Uuid::new_v4(),
            user_id,
            name,
            created_at: OffsetDateTime::now_utc(),
            bricks,
        };
        builds.push(build.clone());
        Ok(build)
    }

    async fn recent_builds_by_user(
        &self,
        user_id: Uuid,
        limit: i64,
    ) -> anyhow::Result<Vec<Build>> {
        let builds = self.builds.lock().expect("builds lock poisoned");
        // Walk newest-insert-first so a stable sort keeps insertion order
        // within equal timestamps.
        let mut recent: Vec<Build> = builds
            .iter()
            .rev()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        recent.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        recent.truncate(limit as usize);
        Ok(recent)
    }

    async fn find_build(&self, id: Uuid) -> anyhow::Result<Option<Build>> {
        let builds = self.builds.lock().expect("builds lock poisoned");
        Ok(builds.iter().find(|b| b.id == id).cloned())
    }
}
