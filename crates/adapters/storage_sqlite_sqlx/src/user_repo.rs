//! `SQLite` implementation of [`UserRepository`] and [`TokenAuthenticator`].

use std::future::Future;

use sqlx::SqlitePool;

use homegate_app::ports::{TokenAuthenticator, UserRepository};
use homegate_domain::device::Device;
use homegate_domain::error::GatewayError;
use homegate_domain::id::{DeviceId, UserId};
use homegate_domain::user::User;

use crate::error::StorageError;

const SELECT_USER_BY_ID: &str = "SELECT id, name FROM users WHERE id = ?";
const SELECT_USER_BY_TOKEN: &str = "SELECT id, name FROM users WHERE api_token = ?";
const SELECT_DEVICES_FOR_USER: &str =
    "SELECT id, name, description FROM devices WHERE user_id = ? ORDER BY id";

/// `SQLite`-backed ownership store.
///
/// Cheap to clone — only the pool handle is duplicated — so the same value
/// can serve as both the user repository and the token authenticator.
#[derive(Clone)]
pub struct SqliteUserRepository {
    pool: SqlitePool,
}

impl SqliteUserRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

/// Attach the user's owned devices, in store order.
async fn materialize(
    pool: &SqlitePool,
    row: Option<(i64, String)>,
) -> Result<Option<User>, StorageError> {
    let Some((id, name)) = row else {
        return Ok(None);
    };

    let device_rows: Vec<(i64, String, String)> = sqlx::query_as(SELECT_DEVICES_FOR_USER)
        .bind(id)
        .fetch_all(pool)
        .await?;

    let devices = device_rows
        .into_iter()
        .map(|(device_id, device_name, description)| {
            Device::new(DeviceId::new(device_id), device_name, description)
        })
        .collect();

    Ok(Some(User::new(UserId::new(id), name, devices)))
}

impl UserRepository for SqliteUserRepository {
    fn get_user(
        &self,
        id: UserId,
    ) -> impl Future<Output = Result<Option<User>, GatewayError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<(i64, String)> = sqlx::query_as(SELECT_USER_BY_ID)
                .bind(id.as_i64())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(materialize(&pool, row).await?)
        }
    }
}

impl TokenAuthenticator for SqliteUserRepository {
    fn resolve(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Option<User>, GatewayError>> + Send {
        let pool = self.pool.clone();
        let token = token.to_string();
        async move {
            let row: Option<(i64, String)> = sqlx::query_as(SELECT_USER_BY_TOKEN)
                .bind(&token)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(materialize(&pool, row).await?)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::Config;

    async fn repo() -> SqliteUserRepository {
        let db = Config {
            database_url: "sqlite::memory:".to_string(),
        }
        .build()
        .await
        .unwrap();
        SqliteUserRepository::new(db.pool().clone())
    }

    async fn seed_user(repo: &SqliteUserRepository, name: &str, token: &str) -> UserId {
        let result = sqlx::query("INSERT INTO users (name, api_token) VALUES (?, ?)")
            .bind(name)
            .bind(token)
            .execute(&repo.pool)
            .await
            .unwrap();
        UserId::new(result.last_insert_rowid())
    }

    async fn seed_device(repo: &SqliteUserRepository, user_id: UserId, name: &str) -> DeviceId {
        let result =
            sqlx::query("INSERT INTO devices (user_id, name, description) VALUES (?, ?, ?)")
                .bind(user_id.as_i64())
                .bind(name)
                .bind(format!("{name} description"))
                .execute(&repo.pool)
                .await
                .unwrap();
        DeviceId::new(result.last_insert_rowid())
    }

    #[tokio::test]
    async fn should_return_none_when_user_does_not_exist() {
        let repo = repo().await;
        let user = repo.get_user(UserId::new(42)).await.unwrap();
        assert!(user.is_none());
    }

    #[tokio::test]
    async fn should_return_user_with_empty_device_set() {
        let repo = repo().await;
        let id = seed_user(&repo, "alice", "token-a").await;

        let user = repo.get_user(id).await.unwrap().unwrap();

        assert_eq!(user.name, "alice");
        assert!(user.devices.is_empty());
    }

    #[tokio::test]
    async fn should_materialize_devices_in_insertion_order() {
        let repo = repo().await;
        let id = seed_user(&repo, "alice", "token-a").await;
        seed_device(&repo, id, "Lamp").await;
        seed_device(&repo, id, "Fan").await;
        seed_device(&repo, id, "Heater").await;

        let user = repo.get_user(id).await.unwrap().unwrap();

        let names: Vec<&str> = user.devices.iter().map(|d| d.name.as_str()).collect();
        assert_eq!(names, ["Lamp", "Fan", "Heater"]);
    }

    #[tokio::test]
    async fn should_not_leak_devices_between_users() {
        let repo = repo().await;
        let alice = seed_user(&repo, "alice", "token-a").await;
        let bob = seed_user(&repo, "bob", "token-b").await;
        let lamp = seed_device(&repo, alice, "Lamp").await;

        let bob = repo.get_user(bob).await.unwrap().unwrap();

        assert!(bob.devices.is_empty());
        assert!(!bob.owns_device(lamp));
    }

    #[tokio::test]
    async fn should_resolve_user_by_token() {
        let repo = repo().await;
        let id = seed_user(&repo, "alice", "token-a").await;
        seed_device(&repo, id, "Lamp").await;

        let user = repo.resolve("token-a").await.unwrap().unwrap();

        assert_eq!(user.id, id);
        assert_eq!(user.devices.len(), 1);
    }

    #[tokio::test]
    async fn should_return_none_when_token_is_unknown() {
        let repo = repo().await;
        seed_user(&repo, "alice", "token-a").await;

        let user = repo.resolve("bogus").await.unwrap();

        assert!(user.is_none());
    }
}
