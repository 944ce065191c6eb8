//! Maximum representable timecode range

use serde::{Deserialize, Serialize};

/// Upper bound of the timecode range
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UpperLimit {
    /// `00:00:00:00 ..< 24:00:00:00`, days field always zero
    #[default]
    Max24Hours,
    /// `0 00:00:00:00 ..< 100 00:00:00:00`
    Max100Days,
}

impl UpperLimit {
    /// Number of whole days in the range.
    #[must_use]
    pub fn max_days(self) -> i64 {
        match self {
            UpperLimit::Max24Hours => 1,
            UpperLimit::Max100Days => 100,
        }
    }

    /// Highest valid days field value.
    #[must_use]
    pub fn max_day_value(self) -> i64 {
        self.max_days() - 1
    }

    /// Seconds contained in the range.
    #[must_use]
    pub fn seconds(self) -> i64 {
        self.max_days() * super::SECONDS_PER_DAY
    }
}
