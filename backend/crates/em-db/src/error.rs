use error_location::ErrorLocation;

use std::panic::Location;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DbError {
    #[error("SQLx error: {source} {location}")]
    Sqlx {
        source: sqlx::Error,
        location: ErrorLocation,
    },

    #[error("Migration error: {message} {location}")]
    Migration {
        message: String,
        location: ErrorLocation,
    },

    #[error("Database initialization failed: {message} {location}")]
    Initialization {
        message: String,
        location: ErrorLocation,
    },

    /// A uniqueness constraint rejected the write (e.g. a second RSVP for the
    /// same user and event).
    #[error("Conflicting write: {message} {location}")]
    Conflict {
        message: String,
        location: ErrorLocation,
    },

    #[error("Stored row could not be decoded: {message} {location}")]
    CorruptRow {
        message: String,
        location: ErrorLocation,
    },
}

impl DbError {
    #[track_caller]
    pub(crate) fn corrupt(message: impl Into<String>) -> Self {
        Self::CorruptRow {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    pub fn is_conflict(&self) -> bool {
        matches!(self, Self::Conflict { .. })
    }
}

impl From<sqlx::Error> for DbError {
    #[track_caller]
    fn from(source: sqlx::Error) -> Self {
        let location = ErrorLocation::from(Location::caller());
        if let sqlx::Error::Database(db_err) = &source
            && db_err.is_unique_violation()
        {
            return Self::Conflict {
                message: db_err.message().to_string(),
                location,
            };
        }
        Self::Sqlx { source, location }
    }
}

pub type Result<T> = std::result::Result<T, DbError>;
