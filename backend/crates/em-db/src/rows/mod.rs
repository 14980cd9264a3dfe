//! Raw row shapes as stored in SQLite (text ids, unix-second timestamps)
//! and their conversion into domain types.

use crate::{DbError, Result as DbErrorResult};

use em_core::{
    Attendee, Event, EventSummary, Organizer, Profile, Rsvp, RsvpStatus,
};

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

#[track_caller]
pub(crate) fn parse_uuid(column: &str, value: &str) -> DbErrorResult<Uuid> {
    Uuid::parse_str(value).map_err(|e| DbError::corrupt(format!("{column} '{value}': {e}")))
}

#[track_caller]
pub(crate) fn parse_timestamp(column: &str, value: i64) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp(value, 0)
        .ok_or_else(|| DbError::corrupt(format!("{column} {value} is out of range")))
}

#[track_caller]
pub(crate) fn parse_status(value: &str) -> DbErrorResult<RsvpStatus> {
    value
        .parse()
        .map_err(|e| DbError::corrupt(format!("status: {e}")))
}

#[derive(Debug, FromRow)]
pub(crate) struct UserRow {
    pub id: String,
    pub name: String,
    pub email: String,
    pub created_at: i64,
}

impl TryFrom<UserRow> for Profile {
    type Error = DbError;

    fn try_from(row: UserRow) -> DbErrorResult<Self> {
        Ok(Profile {
            id: parse_uuid("users.id", &row.id)?,
            name: row.name,
            email: row.email,
            created_at: parse_timestamp("users.created_at", row.created_at)?,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct EventRow {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub date: i64,
    pub city: String,
    pub created_by: String,
    pub created_at: i64,
    pub organizer_name: Option<String>,
    pub organizer_email: Option<String>,
}

impl EventRow {
    pub fn into_parts(self) -> DbErrorResult<(Event, Option<Organizer>)> {
        let organizer = match (self.organizer_name, self.organizer_email) {
            (Some(name), Some(email)) => Some(Organizer { name, email }),
            _ => None,
        };
        let event = Event {
            id: parse_uuid("events.id", &self.id)?,
            title: self.title,
            description: self.description,
            date: parse_timestamp("events.date", self.date)?,
            city: self.city,
            created_by: parse_uuid("events.created_by", &self.created_by)?,
            created_at: parse_timestamp("events.created_at", self.created_at)?,
        };
        Ok((event, organizer))
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct RsvpRow {
    pub id: String,
    pub user_id: String,
    pub event_id: String,
    pub status: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl TryFrom<RsvpRow> for Rsvp {
    type Error = DbError;

    fn try_from(row: RsvpRow) -> DbErrorResult<Self> {
        Ok(Rsvp {
            id: parse_uuid("rsvps.id", &row.id)?,
            user_id: parse_uuid("rsvps.user_id", &row.user_id)?,
            event_id: parse_uuid("rsvps.event_id", &row.event_id)?,
            status: parse_status(&row.status)?,
            created_at: parse_timestamp("rsvps.created_at", row.created_at)?,
            updated_at: parse_timestamp("rsvps.updated_at", row.updated_at)?,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct AttendeeRow {
    #[sqlx(flatten)]
    pub rsvp: RsvpRow,
    pub user_name: Option<String>,
    pub user_email: Option<String>,
}

impl TryFrom<AttendeeRow> for Attendee {
    type Error = DbError;

    fn try_from(row: AttendeeRow) -> DbErrorResult<Self> {
        Ok(Attendee {
            rsvp: Rsvp::try_from(row.rsvp)?,
            name: row.user_name,
            email: row.user_email,
        })
    }
}

#[derive(Debug, FromRow)]
pub(crate) struct EventStatusRow {
    pub event_id: String,
    pub status: String,
}

#[derive(Debug, FromRow)]
pub(crate) struct EventSummaryRow {
    pub event_id: String,
    pub title: String,
    pub city: String,
    pub date: i64,
    pub organizer: String,
    pub total_rsvps: i64,
    pub confirmed_attendees: i64,
    pub maybe_attendees: i64,
    pub declined_attendees: i64,
}

impl TryFrom<EventSummaryRow> for EventSummary {
    type Error = DbError;

    fn try_from(row: EventSummaryRow) -> DbErrorResult<Self> {
        Ok(EventSummary {
            event_id: parse_uuid("event_rsvp_summary.event_id", &row.event_id)?,
            title: row.title,
            city: row.city,
            date: parse_timestamp("event_rsvp_summary.date", row.date)?,
            organizer: row.organizer,
            total_rsvps: row.total_rsvps,
            confirmed_attendees: row.confirmed_attendees,
            maybe_attendees: row.maybe_attendees,
            declined_attendees: row.declined_attendees,
        })
    }
}
