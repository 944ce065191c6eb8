//! Timecode field identifiers

use serde::{Deserialize, Serialize};

/// One of the six timecode fields, most significant first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum TimecodeField {
    /// Days
    Day,
    /// Hours
    Hour,
    /// Minutes
    Minute,
    /// Seconds
    Second,
    /// Frames
    Frame,
    /// Subframes
    SubFrame,
}

impl TimecodeField {
    /// All fields, most significant first.
    pub const ALL: [TimecodeField; 6] = [
        TimecodeField::Day,
        TimecodeField::Hour,
        TimecodeField::Minute,
        TimecodeField::Second,
        TimecodeField::Frame,
        TimecodeField::SubFrame,
    ];

    /// Lowercase field name
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            TimecodeField::Day => "day",
            TimecodeField::Hour => "hour",
            TimecodeField::Minute => "minute",
            TimecodeField::Second => "second",
            TimecodeField::Frame => "frame",
            TimecodeField::SubFrame => "subframe",
        }
    }
}

impl std::fmt::Display for TimecodeField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
