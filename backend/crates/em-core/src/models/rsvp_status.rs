use crate::{CoreError, Result as CoreErrorResult};

use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Attendance intent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RsvpStatus {
    Yes,
    No,
    Maybe,
}

impl RsvpStatus {
    /// Order the options are offered in.
    pub const ALL: [RsvpStatus; 3] = [Self::Yes, Self::Maybe, Self::No];

    /// Convert to database string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "Yes",
            Self::No => "No",
            Self::Maybe => "Maybe",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Yes => "Going",
            Self::Maybe => "Maybe",
            Self::No => "Can't go",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::Yes => "I'll be there!",
            Self::Maybe => "I'm not sure yet",
            Self::No => "I won't be able to attend",
        }
    }

    /// CSS classes for the selected-state badge.
    pub fn style_classes(&self) -> &'static str {
        match self {
            Self::Yes => "bg-success-50 text-success-600 border-success-200",
            Self::No => "bg-danger-50 text-danger-600 border-danger-200",
            Self::Maybe => "bg-warning-50 text-warning-600 border-warning-200",
        }
    }
}

impl FromStr for RsvpStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreErrorResult<Self> {
        match s {
            "Yes" => Ok(Self::Yes),
            "No" => Ok(Self::No),
            "Maybe" => Ok(Self::Maybe),
            _ => Err(CoreError::InvalidRsvpStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}

impl std::fmt::Display for RsvpStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
