use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use sqlx::{postgres::PgPoolOptions, FromRow, PgPool};

pub fn default_provider() -> String {
    "default".to_string()
}

/// User record. `password` holds a digest, never plaintext.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: String,
    #[serde(skip_serializing)]
    pub password: String,
    #[serde(default = "default_provider")]
    pub provider: String,
}

/// Persistence gateway for user rows. One statement per call; no
/// transactions span operations.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>>;
    async fn create(&self, user: &User) -> anyhow::Result<()>;
    async fn update(&self, user: &User) -> anyhow::Result<()>;
    async fn delete_by_id(&self, id: &str) -> anyhow::Result<()>;
}

#[derive(Clone)]
pub struct PgUserStore {
    db: PgPool,
}

impl PgUserStore {
    pub async fn connect(database_url: &str) -> anyhow::Result<Self> {
        let db = PgPoolOptions::new()
            .max_connections(10)
            .connect(database_url)
            .await?;
        Ok(Self { db })
    }

    /// Create the users table if it does not exist yet. Idempotent.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS users (
                id TEXT PRIMARY KEY,
                password TEXT NOT NULL,
                provider TEXT NOT NULL
            )
            "#,
        )
        .execute(&self.db)
        .await?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn find_by_id(&self, id: &str) -> anyhow::Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            r#"
            SELECT id, password, provider
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.db)
        .await?;
        Ok(user)
    }

    async fn create(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, password, provider)
            VALUES ($1, $2, $3)
            "#,
        )
        .bind(&user.id)
        .bind(&user.password)
        .bind(&user.provider)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn update(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET password = $2, provider = $3
            WHERE id = $1
            "#,
        )
        .bind(&user.id)
        .bind(&user.password)
        .bind(&user.provider)
        .execute(&self.db)
        .await?;
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> anyhow::Result<()> {
        sqlx::query(r#"DELETE FROM users WHERE id = $1"#)
            .bind(id)
            .execute(&self.db)
            .await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_is_never_serialized() {
        let user = User {
            id: "u1".into(),
            password: "digest".into(),
            provider: "default".into(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("digest"));
        assert!(json.contains(r#""id":"u1""#));
    }

    #[test]
    fn provider_defaults_when_missing() {
        let user: User = serde_json::from_str(r#"{"id":"u1","password":"pw"}"#).unwrap();
        assert_eq!(user.provider, "default");
    }
}
