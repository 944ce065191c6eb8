//! Conversion properties

use serde::{Deserialize, Serialize};

use crate::rate::{FrameRate, SubFramesBase, UpperLimit};

/// Parameters every conversion and validation is performed against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct TimecodeProperties {
    /// Frame rate (default: 24 fps)
    pub frame_rate: FrameRate,

    /// Subframe resolution (default: 80 subframes per frame)
    pub sub_frames_base: SubFramesBase,

    /// Range limit (default: 24 hours)
    pub upper_limit: UpperLimit,
}

impl TimecodeProperties {
    /// Properties at the given rate with default subframe base and limit
    #[must_use]
    pub fn new(frame_rate: FrameRate) -> Self {
        Self {
            frame_rate,
            ..Self::default()
        }
    }

    /// Create a new properties builder
    #[must_use]
    pub fn builder() -> TimecodePropertiesBuilder {
        TimecodePropertiesBuilder::default()
    }

    /// Total elapsed frames contained in the range.
    #[must_use]
    pub fn max_total_frames(&self) -> i64 {
        self.frame_rate.max_total_frames(self.upper_limit)
    }

    /// Range expressed in subframes.
    #[must_use]
    pub fn max_total_sub_frames(&self) -> i64 {
        self.max_total_frames() * self.sub_frames_base.divisor()
    }
}

impl From<FrameRate> for TimecodeProperties {
    fn from(frame_rate: FrameRate) -> Self {
        Self::new(frame_rate)
    }
}

/// Builder for `TimecodeProperties`
#[derive(Debug, Clone, Default)]
pub struct TimecodePropertiesBuilder {
    properties: TimecodeProperties,
}

impl TimecodePropertiesBuilder {
    /// Set frame rate
    #[must_use]
    pub fn frame_rate(mut self, frame_rate: FrameRate) -> Self {
        self.properties.frame_rate = frame_rate;
        self
    }

    /// Set subframe resolution
    #[must_use]
    pub fn sub_frames_base(mut self, base: SubFramesBase) -> Self {
        self.properties.sub_frames_base = base;
        self
    }

    /// Set range limit
    #[must_use]
    pub fn upper_limit(mut self, limit: UpperLimit) -> Self {
        self.properties.upper_limit = limit;
        self
    }

    /// Build the properties
    #[must_use]
    pub fn build(self) -> TimecodeProperties {
        self.properties
    }
}
