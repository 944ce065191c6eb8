//! Timecode component fields

use serde::{Deserialize, Serialize};

use super::TimecodeField;

/// The six fields of a timecode address.
///
/// Values are not bounded by themselves; validity depends on the
/// [`TimecodeProperties`](super::TimecodeProperties) they are interpreted
/// with. A negative duration carries its sign on the most significant
/// nonzero field only, e.g. `-01:01:05:00` is `hour = -1, minute = 1,
/// second = 5`. Any other mix of signs is a signed sum of the fields, so
/// `hour = 1, frame = -1` is one frame before one hour.
///
/// Ordering is lexicographic from `day` down to `subframe`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct Components {
    /// Days
    pub day: i64,
    /// Hours
    pub hour: i64,
    /// Minutes
    pub minute: i64,
    /// Seconds
    pub second: i64,
    /// Frames
    pub frame: i64,
    /// Subframes
    pub subframe: i64,
}

impl Components {
    /// All fields zero.
    pub const ZERO: Self = Self {
        day: 0,
        hour: 0,
        minute: 0,
        second: 0,
        frame: 0,
        subframe: 0,
    };

    /// Create from all six fields
    #[must_use]
    pub fn new(day: i64, hour: i64, minute: i64, second: i64, frame: i64, subframe: i64) -> Self {
        Self {
            day,
            hour,
            minute,
            second,
            frame,
            subframe,
        }
    }

    /// Create from hours, minutes, seconds and frames
    #[must_use]
    pub fn hmsf(hour: i64, minute: i64, second: i64, frame: i64) -> Self {
        Self {
            hour,
            minute,
            second,
            frame,
            ..Self::ZERO
        }
    }

    /// Value of a single field.
    #[must_use]
    pub fn get(&self, field: TimecodeField) -> i64 {
        match field {
            TimecodeField::Day => self.day,
            TimecodeField::Hour => self.hour,
            TimecodeField::Minute => self.minute,
            TimecodeField::Second => self.second,
            TimecodeField::Frame => self.frame,
            TimecodeField::SubFrame => self.subframe,
        }
    }

    /// Replace a single field.
    pub fn set(&mut self, field: TimecodeField, value: i64) {
        match field {
            TimecodeField::Day => self.day = value,
            TimecodeField::Hour => self.hour = value,
            TimecodeField::Minute => self.minute = value,
            TimecodeField::Second => self.second = value,
            TimecodeField::Frame => self.frame = value,
            TimecodeField::SubFrame => self.subframe = value,
        }
    }

    /// Whether every field is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Whether the value denotes a negative duration: the most significant
    /// nonzero field is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.leading_field().is_some_and(|field| self.get(field) < 0)
    }

    /// Whether only the most significant nonzero field may carry a sign.
    ///
    /// Values that break this have fields of mixed signs and are read as a
    /// signed sum of their fields.
    #[must_use]
    pub fn is_sign_normalized(&self) -> bool {
        TimecodeField::ALL
            .iter()
            .skip_while(|&&field| self.get(field) == 0)
            .skip(1)
            .all(|&field| self.get(field) >= 0)
    }

    /// Absolute value of every field, saturating at `i64::MAX`.
    #[must_use]
    pub fn magnitude(&self) -> Self {
        Self {
            day: self.day.saturating_abs(),
            hour: self.hour.saturating_abs(),
            minute: self.minute.saturating_abs(),
            second: self.second.saturating_abs(),
            frame: self.frame.saturating_abs(),
            subframe: self.subframe.saturating_abs(),
        }
    }

    /// Negate the most significant nonzero field of a non-negative value.
    ///
    /// All other fields are left as magnitudes. Zero stays zero.
    #[must_use]
    pub fn negated_leading(&self) -> Self {
        let mut out = *self;
        if let Some(field) = self.leading_field() {
            out.set(field, self.get(field).saturating_neg());
        }
        out
    }

    fn leading_field(&self) -> Option<TimecodeField> {
        TimecodeField::ALL
            .iter()
            .copied()
            .find(|&field| self.get(field) != 0)
    }
}

impl From<[i64; 6]> for Components {
    fn from(v: [i64; 6]) -> Self {
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5])
    }
}

impl From<Components> for [i64; 6] {
    fn from(c: Components) -> Self {
        [c.day, c.hour, c.minute, c.second, c.frame, c.subframe]
    }
}
