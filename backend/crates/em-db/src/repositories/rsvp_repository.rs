use crate::Result as DbErrorResult;
use crate::rows::{AttendeeRow, RsvpRow};

use em_core::{Attendee, Rsvp};

use sqlx::SqlitePool;
use uuid::Uuid;

pub struct RsvpRepository {
    pool: SqlitePool,
}

impl RsvpRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a new response. A second row for the same user and event is
    /// rejected with [`crate::DbError::Conflict`].
    pub async fn create(&self, rsvp: &Rsvp) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO rsvps (id, user_id, event_id, status, created_at, updated_at)
              VALUES (?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(rsvp.id.to_string())
        .bind(rsvp.user_id.to_string())
        .bind(rsvp.event_id.to_string())
        .bind(rsvp.status.as_str())
        .bind(rsvp.created_at.timestamp())
        .bind(rsvp.updated_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    pub async fn find_by_id(&self, id: Uuid) -> DbErrorResult<Option<Rsvp>> {
        let row = sqlx::query_as::<_, RsvpRow>(
            r#"
              SELECT id, user_id, event_id, status, created_at, updated_at
              FROM rsvps
              WHERE id = ?
              "#,
        )
        .bind(id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Rsvp::try_from).transpose()
    }

    pub async fn find_for_user_and_event(
        &self,
        user_id: Uuid,
        event_id: Uuid,
    ) -> DbErrorResult<Option<Rsvp>> {
        let row = sqlx::query_as::<_, RsvpRow>(
            r#"
              SELECT id, user_id, event_id, status, created_at, updated_at
              FROM rsvps
              WHERE user_id = ? AND event_id = ?
              "#,
        )
        .bind(user_id.to_string())
        .bind(event_id.to_string())
        .fetch_optional(&self.pool)
        .await?;

        row.map(Rsvp::try_from).transpose()
    }

    /// Responses for one event, oldest first, with the responder's name/email.
    pub async fn find_by_event(&self, event_id: Uuid) -> DbErrorResult<Vec<Attendee>> {
        let rows = sqlx::query_as::<_, AttendeeRow>(
            r#"
              SELECT r.id, r.user_id, r.event_id, r.status, r.created_at, r.updated_at,
                     u.name AS user_name, u.email AS user_email
              FROM rsvps r
              LEFT JOIN users u ON u.id = r.user_id
              WHERE r.event_id = ?
              ORDER BY r.created_at ASC, r.id ASC
              "#,
        )
        .bind(event_id.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(Attendee::try_from).collect()
    }

    /// Persist `rsvp.status` and `rsvp.updated_at`. Returns `false` when no
    /// row has that id.
    pub async fn update_status(&self, rsvp: &Rsvp) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
              UPDATE rsvps
              SET status = ?, updated_at = ?
              WHERE id = ?
              "#,
        )
        .bind(rsvp.status.as_str())
        .bind(rsvp.updated_at.timestamp())
        .bind(rsvp.id.to_string())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
