use crate::Result as DbErrorResult;
use crate::rows::UserRow;

use em_core::Profile;

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, profile: &Profile) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO users (id, name, email, created_at)
              VALUES (?, ?, ?, ?)
              "#,
        )
        .bind(profile.id.to_string())
        .bind(&profile.name)
        .bind(&profile.email)
        .bind(profile.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Profile>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
              SELECT id, name, email, created_at
              FROM users
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Profile::try_from).transpose()
    }
}
