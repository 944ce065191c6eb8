//! Elapsed frame counts
//!
//! A [`FrameCount`] is the canonical intermediate form for every conversion.
//! Its fractional part may be supplied in several encodings; all of them are
//! normalized to a single count of subframes before use.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::convert::frames::saturate;
use crate::rate::SubFramesBase;

/// Encoding of an elapsed frame count.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum FrameCountValue {
    /// Whole frames only
    Frames(i64),
    /// Whole frames plus a subframe count in units of the subframes base
    Split {
        /// Whole frames
        frames: i64,
        /// Subframes
        sub_frames: i64,
    },
    /// Frames with the fractional part as a floating-point remainder
    Combined(f64),
    /// Whole frames plus a fraction of a frame in `0.0 ..< 1.0`
    SplitUnitInterval {
        /// Whole frames
        frames: i64,
        /// Fraction of one frame
        sub_frames_unit_interval: f64,
    },
}

/// Total elapsed frames and subframes, tied to a subframe resolution.
///
/// Equality and ordering compare the normalized value, so
/// `Split { frames: 1, sub_frames: 40 }` equals `Combined(1.5)` at 80
/// subframes per frame.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct FrameCount {
    /// Encoded value
    pub value: FrameCountValue,
    /// Subframe resolution the value is expressed in
    pub sub_frames_base: SubFramesBase,
}

impl FrameCount {
    /// Create from an encoded value
    #[must_use]
    pub fn new(value: FrameCountValue, sub_frames_base: SubFramesBase) -> Self {
        Self {
            value,
            sub_frames_base,
        }
    }

    /// Whole frames only
    #[must_use]
    pub fn frames(frames: i64, sub_frames_base: SubFramesBase) -> Self {
        Self::new(FrameCountValue::Frames(frames), sub_frames_base)
    }

    /// Whole frames plus subframes
    #[must_use]
    pub fn split(frames: i64, sub_frames: i64, sub_frames_base: SubFramesBase) -> Self {
        Self::new(
            FrameCountValue::Split { frames, sub_frames },
            sub_frames_base,
        )
    }

    /// Floating-point frames
    #[must_use]
    pub fn combined(frames: f64, sub_frames_base: SubFramesBase) -> Self {
        Self::new(FrameCountValue::Combined(frames), sub_frames_base)
    }

    /// Canonical form holding an exact number of subframes.
    #[must_use]
    pub fn from_total_sub_frames(total: i64, sub_frames_base: SubFramesBase) -> Self {
        let base = sub_frames_base.divisor();
        Self::split(total / base, total % base, sub_frames_base)
    }

    /// Value expressed as a count of subframes.
    ///
    /// Floating-point encodings are truncated toward zero, except that a
    /// product within `1e-6` of a whole subframe snaps to it. Saturates at
    /// the `i64` range.
    #[must_use]
    pub fn total_sub_frames(&self) -> i64 {
        let base = self.sub_frames_base.divisor();
        let whole = |frames: i64| i128::from(frames) * i128::from(base);
        match self.value {
            FrameCountValue::Frames(frames) => saturate(whole(frames)),
            FrameCountValue::Split { frames, sub_frames } => {
                saturate(whole(frames) + i128::from(sub_frames))
            }
            FrameCountValue::Combined(frames) => scaled_to_sub_frames(frames, base),
            FrameCountValue::SplitUnitInterval {
                frames,
                sub_frames_unit_interval,
            } => saturate(
                whole(frames) + i128::from(scaled_to_sub_frames(sub_frames_unit_interval, base)),
            ),
        }
    }

    /// Whole frames, truncated toward zero.
    #[must_use]
    pub fn whole_frames(&self) -> i64 {
        self.total_sub_frames() / self.sub_frames_base.divisor()
    }

    /// Subframes beyond the whole frames; carries the sign of the value.
    #[must_use]
    pub fn sub_frames(&self) -> i64 {
        self.total_sub_frames() % self.sub_frames_base.divisor()
    }

    /// Subframes as a fraction of one frame.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn sub_frames_unit_interval(&self) -> f64 {
        self.sub_frames() as f64 / self.sub_frames_base.divisor() as f64
    }

    /// Frames including the subframe fraction.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn double_value(&self) -> f64 {
        self.whole_frames() as f64 + self.sub_frames_unit_interval()
    }

    /// Whether the normalized value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.total_sub_frames() == 0
    }

    /// Whether the normalized value is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.total_sub_frames() < 0
    }

    /// Canonical `Split` form of this value.
    #[must_use]
    pub fn normalized(&self) -> Self {
        Self::from_total_sub_frames(self.total_sub_frames(), self.sub_frames_base)
    }

    /// Re-express the value at another subframe resolution.
    ///
    /// Subframes are scaled and truncated toward zero.
    #[must_use]
    pub fn with_sub_frames_base(&self, sub_frames_base: SubFramesBase) -> Self {
        let sub_frames =
            self.sub_frames() * sub_frames_base.divisor() / self.sub_frames_base.divisor();
        Self::split(self.whole_frames(), sub_frames, sub_frames_base)
    }

    /// Value with the opposite sign.
    #[must_use]
    pub fn negated(&self) -> Self {
        Self::from_total_sub_frames(self.total_sub_frames().saturating_neg(), self.sub_frames_base)
    }

    fn cross(&self, other: &Self) -> (i128, i128) {
        let lhs =
            i128::from(self.total_sub_frames()) * i128::from(other.sub_frames_base.divisor());
        let rhs =
            i128::from(other.total_sub_frames()) * i128::from(self.sub_frames_base.divisor());
        (lhs, rhs)
    }
}

impl PartialEq for FrameCount {
    fn eq(&self, other: &Self) -> bool {
        let (lhs, rhs) = self.cross(other);
        lhs == rhs
    }
}

impl Eq for FrameCount {}

impl PartialOrd for FrameCount {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrameCount {
    fn cmp(&self, other: &Self) -> Ordering {
        let (lhs, rhs) = self.cross(other);
        lhs.cmp(&rhs)
    }
}

impl std::fmt::Display for FrameCount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let total = self.total_sub_frames();
        let sign = if total < 0 { "-" } else { "" };
        let base = self.sub_frames_base.divisor();
        write!(f, "{sign}{}+{}/{base}", (total / base).abs(), (total % base).abs())
    }
}

#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation)]
fn scaled_to_sub_frames(frames: f64, base: i64) -> i64 {
    let scaled = frames * base as f64;
    let nearest = scaled.round();
    if (scaled - nearest).abs() < 1e-6 {
        nearest as i64
    } else {
        scaled.trunc() as i64
    }
}
