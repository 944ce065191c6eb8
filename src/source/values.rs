//! Value sources: fields, frame counts, time values and strings

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::{
    GuaranteedTimecodeSource, RichTimecodeSource, TimecodeSource, ValidatingTimecodeSource,
};
use crate::convert::{rational, real_time, samples, string};
use crate::error::Result;
use crate::timecode::Timecode;
use crate::types::{Components, Fraction, FrameCount, TimecodeProperties};
use crate::validation::{Validation, validate, validate_frame_count};

/// Elapsed real time in seconds.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct RealTime(pub f64);

impl From<Duration> for RealTime {
    fn from(duration: Duration) -> Self {
        Self(duration.as_secs_f64())
    }
}

/// Elapsed audio samples at a sample rate.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
pub struct Samples {
    /// Sample count; may be fractional
    pub count: f64,
    /// Sample rate in Hz
    pub sample_rate: u32,
}

impl Samples {
    /// Create a new sample value
    #[must_use]
    pub fn new(count: f64, sample_rate: u32) -> Self {
        Self { count, sample_rate }
    }

    /// A whole number of samples
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn whole(count: i64, sample_rate: u32) -> Self {
        Self::new(count as f64, sample_rate)
    }
}

/// The zero timecode, `00:00:00:00.00`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Zero;

// ===== Components =====

impl TimecodeSource for Components {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        self.set_timecode_by(timecode, Validation::Exact)
    }
}

impl ValidatingTimecodeSource for Components {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        let components = validate(*self, &timecode.properties(), validation)?;
        timecode.replace_components(components);
        Ok(())
    }
}

// ===== Frame counts =====

impl TimecodeSource for FrameCount {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        self.set_timecode_by(timecode, Validation::Exact)
    }
}

impl ValidatingTimecodeSource for FrameCount {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        let components = validate_frame_count(self, &timecode.properties(), validation)?;
        timecode.replace_components(components);
        Ok(())
    }
}

// ===== Rational time =====

impl TimecodeSource for Fraction {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        self.set_timecode_by(timecode, Validation::Exact)
    }
}

impl ValidatingTimecodeSource for Fraction {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        let properties = timecode.properties();
        let frame_count = rational::frame_count(self, &properties);
        let components = validate_frame_count(&frame_count, &properties, validation)?;
        timecode.replace_components(components);
        Ok(())
    }
}

// ===== Real time =====

impl TimecodeSource for RealTime {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        self.set_timecode_by(timecode, Validation::Exact)
    }
}

impl ValidatingTimecodeSource for RealTime {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        let properties = timecode.properties();
        let frame_count = real_time::frame_count(self.0, &properties);
        let components = validate_frame_count(&frame_count, &properties, validation)?;
        timecode.replace_components(components);
        Ok(())
    }
}

impl TimecodeSource for Duration {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        RealTime::from(*self).set_timecode(timecode)
    }
}

impl ValidatingTimecodeSource for Duration {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        RealTime::from(*self).set_timecode_by(timecode, validation)
    }
}

// ===== Audio samples =====

impl TimecodeSource for Samples {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        self.set_timecode_by(timecode, Validation::Exact)
    }
}

impl ValidatingTimecodeSource for Samples {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        let properties = timecode.properties();
        let frame_count = samples::frame_count(self.count, self.sample_rate, &properties);
        let components = validate_frame_count(&frame_count, &properties, validation)?;
        timecode.replace_components(components);
        Ok(())
    }
}

// ===== Strings =====

impl TimecodeSource for str {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        self.set_timecode_by(timecode, Validation::Exact)
    }
}

impl ValidatingTimecodeSource for str {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        string::decode(self)?.set_timecode_by(timecode, validation)
    }
}

impl TimecodeSource for String {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        self.as_str().set_timecode(timecode)
    }
}

impl ValidatingTimecodeSource for String {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        self.as_str().set_timecode_by(timecode, validation)
    }
}

// ===== Zero =====

impl GuaranteedTimecodeSource for Zero {
    fn set_timecode_guaranteed(&self, timecode: &mut Timecode) {
        timecode.replace_components(Components::ZERO);
    }
}

// ===== Timecode =====

/// Another timecode supplies its value re-expressed in the target's
/// properties, through its exact rational time when the properties differ.
impl TimecodeSource for Timecode {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        self.set_timecode_by(timecode, Validation::Exact)
    }
}

impl ValidatingTimecodeSource for Timecode {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        let target = timecode.properties();
        let components = if self.properties() == target {
            validate(self.components(), &target, validation)?
        } else {
            let frame_count = rational::frame_count(&self.rational_value(), &target);
            validate_frame_count(&frame_count, &target, validation)?
        };
        timecode.replace_components(components);
        Ok(())
    }
}

impl RichTimecodeSource for Timecode {
    fn set_timecode_rich(&self, timecode: &mut Timecode) -> TimecodeProperties {
        *timecode = *self;
        self.properties()
    }
}
