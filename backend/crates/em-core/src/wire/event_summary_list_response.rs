use crate::EventSummary;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventSummaryListResponse {
    pub summaries: Vec<EventSummary>,
}
