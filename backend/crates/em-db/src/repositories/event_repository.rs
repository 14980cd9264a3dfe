use crate::Result as DbErrorResult;
use crate::RsvpRepository;
use crate::rows::{EventRow, EventStatusRow, EventSummaryRow, parse_status, parse_uuid};

use em_core::{Event, EventSummary, EventWithOrganizer, RsvpStatus};

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;
use uuid::Uuid;

const EVENT_COLUMNS: &str = r#"
    e.id, e.title, e.description, e.date, e.city, e.created_by, e.created_at,
    u.name AS organizer_name, u.email AS organizer_email
"#;

pub struct EventRepository {
    pool: SqlitePool,
}

impl EventRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, event: &Event) -> DbErrorResult<()> {
        sqlx::query(
            r#"
              INSERT INTO events (id, title, description, date, city, created_by, created_at)
              VALUES (?, ?, ?, ?, ?, ?, ?)
              "#,
        )
        .bind(event.id.to_string())
        .bind(&event.title)
        .bind(&event.description)
        .bind(event.date.timestamp())
        .bind(&event.city)
        .bind(event.created_by.to_string())
        .bind(event.created_at.timestamp())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Events dated at or after `now`, soonest first, with organizer and
    /// RSVP counts.
    pub async fn list_upcoming(&self, now: DateTime<Utc>) -> DbErrorResult<Vec<EventWithOrganizer>> {
        let cutoff = now.timestamp();

        let rows = sqlx::query_as::<_, EventRow>(&format!(
            r#"
              SELECT {EVENT_COLUMNS}
              FROM events e
              LEFT JOIN users u ON u.id = e.created_by
              WHERE e.date >= ?
              ORDER BY e.date ASC, e.id ASC
              "#
        ))
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        let status_rows = sqlx::query_as::<_, EventStatusRow>(
            r#"
              SELECT r.event_id, r.status
              FROM rsvps r
              JOIN events e ON e.id = r.event_id
              WHERE e.date >= ?
              "#,
        )
        .bind(cutoff)
        .fetch_all(&self.pool)
        .await?;

        let mut statuses: HashMap<Uuid, Vec<RsvpStatus>> = HashMap::new();
        for row in status_rows {
            let event_id = parse_uuid("rsvps.event_id", &row.event_id)?;
            statuses
                .entry(event_id)
                .or_default()
                .push(parse_status(&row.status)?);
        }

        rows.into_iter()
            .map(|row| {
                let (event, organizer) = row.into_parts()?;
                let event_statuses = statuses.remove(&event.id).unwrap_or_default();
                Ok(EventWithOrganizer::new(event, organizer, event_statuses))
            })
            .collect()
    }

    /// One event with organizer and counts, plus `viewer`'s own RSVP when given.
    pub async fn find_with_organizer(
        &self,
        id: Uuid,
        viewer: Option<Uuid>,
    ) -> DbErrorResult<Option<EventWithOrganizer>> {
        let id_str = id.to_string();

        let row = sqlx::query_as::<_, EventRow>(&format!(
            r#"
              SELECT {EVENT_COLUMNS}
              FROM events e
              LEFT JOIN users u ON u.id = e.created_by
              WHERE e.id = ?
              "#
        ))
        .bind(&id_str)
        .fetch_optional(&self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        let status_rows = sqlx::query_as::<_, EventStatusRow>(
            r#"
              SELECT event_id, status
              FROM rsvps
              WHERE event_id = ?
              "#,
        )
        .bind(&id_str)
        .fetch_all(&self.pool)
        .await?;

        let statuses = status_rows
            .iter()
            .map(|r| parse_status(&r.status))
            .collect::<DbErrorResult<Vec<_>>>()?;

        let (event, organizer) = row.into_parts()?;
        let mut detail = EventWithOrganizer::new(event, organizer, statuses);

        if let Some(viewer) = viewer {
            let user_rsvp = RsvpRepository::new(self.pool.clone())
                .find_for_user_and_event(viewer, id)
                .await?;
            detail = detail.with_user_rsvp(user_rsvp);
        }

        Ok(Some(detail))
    }

    pub async fn exists(&self, id: Uuid) -> DbErrorResult<bool> {
        let found: Option<i64> = sqlx::query_scalar("SELECT 1 FROM events WHERE id = ?")
            .bind(id.to_string())
            .fetch_optional(&self.pool)
            .await?;

        Ok(found.is_some())
    }

    /// Rows of the `event_rsvp_summary` view, soonest first.
    pub async fn summaries(&self) -> DbErrorResult<Vec<EventSummary>> {
        let rows = sqlx::query_as::<_, EventSummaryRow>(
            r#"
              SELECT event_id, title, city, date, organizer,
                     total_rsvps, confirmed_attendees, maybe_attendees, declined_attendees
              FROM event_rsvp_summary
              ORDER BY date ASC
              "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(EventSummary::try_from).collect()
    }
}
