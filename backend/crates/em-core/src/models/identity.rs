//! Identity issued by the auth service.

use crate::{CoreError, ErrorLocation, Result as CoreResult};

use std::collections::BTreeMap;
use std::panic::Location;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Metadata key that may carry a display name chosen at sign-up.
pub const METADATA_NAME_KEY: &str = "name";

/// Minimal authenticated-user record. Owned by the auth service and mirrored
/// read-only by everything in this workspace.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Opaque user id (the token subject)
    pub id: String,
    pub email: Option<String>,
    #[serde(default)]
    pub metadata: BTreeMap<String, Value>,
}

impl Identity {
    pub fn new(id: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: id.into(),
            email,
            metadata: BTreeMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: Value) -> Self {
        self.metadata.insert(key.into(), value);
        self
    }

    /// Display name stored in the auth metadata, if any and non-blank.
    pub fn metadata_name(&self) -> Option<&str> {
        self.metadata
            .get(METADATA_NAME_KEY)
            .and_then(Value::as_str)
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// The subject as a row key. Identities whose id is not a UUID have no
    /// rows in the tabular store.
    #[track_caller]
    pub fn user_uuid(&self) -> CoreResult<Uuid> {
        Uuid::parse_str(&self.id).map_err(|source| CoreError::Uuid {
            source,
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
