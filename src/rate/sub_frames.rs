//! Subframe resolution

use serde::{Deserialize, Serialize};

/// Number of subframe divisions per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SubFramesBase {
    /// 100 subframes per frame
    Max100SubFrames,
    /// 80 subframes per frame (common in audio workstations)
    #[default]
    Max80SubFrames,
    /// 50 subframes per frame
    Max50SubFrames,
    /// 4 subframes per frame (quarter-frame MTC)
    Max4SubFrames,
}

impl SubFramesBase {
    /// Divisor applied to the subframes field.
    #[must_use]
    pub fn divisor(self) -> i64 {
        match self {
            SubFramesBase::Max100SubFrames => 100,
            SubFramesBase::Max80SubFrames => 80,
            SubFramesBase::Max50SubFrames => 50,
            SubFramesBase::Max4SubFrames => 4,
        }
    }

    /// Highest valid subframes value.
    #[must_use]
    pub fn max_sub_frames(self) -> i64 {
        self.divisor() - 1
    }

    /// Digits used to display the subframes field.
    #[must_use]
    pub fn number_of_digits(self) -> usize {
        match self {
            SubFramesBase::Max100SubFrames
            | SubFramesBase::Max80SubFrames
            | SubFramesBase::Max50SubFrames => 2,
            SubFramesBase::Max4SubFrames => 1,
        }
    }

    /// Create from a divisor value
    #[must_use]
    pub fn from_divisor(divisor: i64) -> Option<Self> {
        match divisor {
            100 => Some(SubFramesBase::Max100SubFrames),
            80 => Some(SubFramesBase::Max80SubFrames),
            50 => Some(SubFramesBase::Max50SubFrames),
            4 => Some(SubFramesBase::Max4SubFrames),
            _ => None,
        }
    }
}
