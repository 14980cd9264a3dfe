use crate::RsvpStatus;

use serde::{Deserialize, Serialize};

/// RSVP totals for one event, partitioned by status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct RsvpCounts {
    pub total: u32,
    pub yes: u32,
    pub maybe: u32,
    pub no: u32,
}

impl RsvpCounts {
    /// Count statuses. Input order does not matter.
    pub fn tally(statuses: impl IntoIterator<Item = RsvpStatus>) -> Self {
        statuses.into_iter().fold(Self::default(), |mut counts, status| {
            counts.record(status);
            counts
        })
    }

    pub fn record(&mut self, status: RsvpStatus) {
        match status {
            RsvpStatus::Yes => self.yes += 1,
            RsvpStatus::Maybe => self.maybe += 1,
            RsvpStatus::No => self.no += 1,
        }
        self.total += 1;
    }

    pub fn count(&self, status: RsvpStatus) -> u32 {
        match status {
            RsvpStatus::Yes => self.yes,
            RsvpStatus::Maybe => self.maybe,
            RsvpStatus::No => self.no,
        }
    }

    /// "1 Response" / "3 Responses"
    pub fn responses_label(&self) -> String {
        if self.total == 1 {
            "1 Response".to_string()
        } else {
            format!("{} Responses", self.total)
        }
    }
}
