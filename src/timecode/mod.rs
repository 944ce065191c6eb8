//! The timecode value type
//!
//! A [`Timecode`] pairs a set of [`Components`] with the
//! [`TimecodeProperties`] they are interpreted against. Every value is
//! populated from a source (see [`crate::source`]); conversions to the other
//! time representations are computed on demand.

mod math;

#[cfg(test)]
mod tests;

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::convert::{StringFormat, frames, rational, real_time, samples, string};
use crate::error::Result;
use crate::rate::{FrameRate, SubFramesBase, UpperLimit};
use crate::source::{
    GuaranteedTimecodeSource, RichTimecodeSource, TimecodeSource, ValidatingTimecodeSource,
};
use crate::types::{Components, Fraction, FrameCount, TimecodeField, TimecodeProperties};
use crate::validation::{self, Validation};

/// A frame-accurate position or duration at a frame rate.
///
/// Components are valid for the properties unless the value was built or
/// modified with [`Validation::AllowInvalid`].
///
/// # Example
///
/// ```
/// use timecode::{FrameRate, Timecode};
///
/// let tc = Timecode::new("01:00:00;00", FrameRate::Fps29_97Drop)?;
/// assert_eq!(tc.frame_count().whole_frames(), 107_892);
/// # Ok::<(), timecode::TimecodeError>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timecode {
    components: Components,
    properties: TimecodeProperties,
}

impl Timecode {
    /// Zero timecode with the given properties
    #[must_use]
    pub fn zero(properties: impl Into<TimecodeProperties>) -> Self {
        Self {
            components: Components::ZERO,
            properties: properties.into(),
        }
    }

    /// Timecode from a source that must be exactly valid.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TimecodeError::OutOfBounds`] if the value does not
    /// fit the properties, or the source's own error if it cannot be read.
    pub fn new(
        source: impl TimecodeSource,
        properties: impl Into<TimecodeProperties>,
    ) -> Result<Self> {
        let mut timecode = Self::zero(properties);
        source.set_timecode(&mut timecode)?;
        Ok(timecode)
    }

    /// Timecode from a source, handling out-of-range values by `validation`.
    ///
    /// # Errors
    ///
    /// Fails under [`Validation::Exact`] like [`Timecode::new`], and under
    /// any policy when the source cannot be read.
    pub fn new_by(
        source: impl ValidatingTimecodeSource,
        properties: impl Into<TimecodeProperties>,
        validation: Validation,
    ) -> Result<Self> {
        let mut timecode = Self::zero(properties);
        source.set_timecode_by(&mut timecode, validation)?;
        Ok(timecode)
    }

    /// Timecode from a source that is always valid.
    #[must_use]
    pub fn new_guaranteed(
        source: impl GuaranteedTimecodeSource,
        properties: impl Into<TimecodeProperties>,
    ) -> Self {
        let mut timecode = Self::zero(properties);
        source.set_timecode_guaranteed(&mut timecode);
        timecode
    }

    /// Timecode from a source that carries its own properties.
    #[must_use]
    pub fn from_rich(source: impl RichTimecodeSource) -> Self {
        let mut timecode = Self::zero(TimecodeProperties::default());
        source.set_timecode_rich(&mut timecode);
        timecode
    }

    /// Parse a display string at the given properties.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TimecodeError::MalformedString`] for unparseable
    /// input or [`crate::TimecodeError::OutOfBounds`] for invalid fields.
    pub fn parse(input: &str, properties: impl Into<TimecodeProperties>) -> Result<Self> {
        Self::new(input, properties)
    }

    // ===== Setters =====

    /// Replace the value from an exact source. Unchanged on error.
    ///
    /// # Errors
    ///
    /// See [`Timecode::new`].
    pub fn set(&mut self, source: impl TimecodeSource) -> Result<()> {
        source.set_timecode(self)
    }

    /// Replace the value from a source by policy. Unchanged on error.
    ///
    /// # Errors
    ///
    /// See [`Timecode::new_by`].
    pub fn set_by(
        &mut self,
        source: impl ValidatingTimecodeSource,
        validation: Validation,
    ) -> Result<()> {
        source.set_timecode_by(self, validation)
    }

    /// Replace the value from a source that is always valid.
    pub fn set_guaranteed(&mut self, source: impl GuaranteedTimecodeSource) {
        source.set_timecode_guaranteed(self);
    }

    /// Replace value and properties from a source that carries both.
    pub fn set_rich(&mut self, source: impl RichTimecodeSource) -> TimecodeProperties {
        source.set_timecode_rich(self)
    }

    /// Replace the components, handling out-of-range fields by `validation`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TimecodeError::OutOfBounds`] under
    /// [`Validation::Exact`].
    pub fn set_components(&mut self, components: Components, validation: Validation) -> Result<()> {
        self.set_by(components, validation)
    }

    /// Set a single field, handling an out-of-range result by `validation`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TimecodeError::OutOfBounds`] under
    /// [`Validation::Exact`].
    pub fn set_field(
        &mut self,
        field: TimecodeField,
        value: i64,
        validation: Validation,
    ) -> Result<()> {
        let mut components = self.components;
        components.set(field, value);
        self.set_components(components, validation)
    }

    /// Reinterpret the current components at new properties.
    ///
    /// The fields are kept and validated by `validation`; use
    /// [`Timecode::converted`] to keep the time instead.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TimecodeError::OutOfBounds`] under
    /// [`Validation::Exact`] if the fields are invalid at the new properties.
    pub fn set_properties(
        &mut self,
        properties: impl Into<TimecodeProperties>,
        validation: Validation,
    ) -> Result<()> {
        let properties = properties.into();
        let components = validation::validate(self.components, &properties, validation)?;
        self.components = components;
        self.properties = properties;
        Ok(())
    }

    pub(crate) fn replace_components(&mut self, components: Components) {
        self.components = components;
    }

    // ===== Accessors =====

    /// The fields
    #[must_use]
    pub fn components(&self) -> Components {
        self.components
    }

    /// The properties the fields are interpreted against
    #[must_use]
    pub fn properties(&self) -> TimecodeProperties {
        self.properties
    }

    /// Frame rate
    #[must_use]
    pub fn frame_rate(&self) -> FrameRate {
        self.properties.frame_rate
    }

    /// Subframe resolution
    #[must_use]
    pub fn sub_frames_base(&self) -> SubFramesBase {
        self.properties.sub_frames_base
    }

    /// Range limit
    #[must_use]
    pub fn upper_limit(&self) -> UpperLimit {
        self.properties.upper_limit
    }

    /// A single field
    #[must_use]
    pub fn get(&self, field: TimecodeField) -> i64 {
        self.components.get(field)
    }

    /// Days
    #[must_use]
    pub fn day(&self) -> i64 {
        self.components.day
    }

    /// Hours
    #[must_use]
    pub fn hour(&self) -> i64 {
        self.components.hour
    }

    /// Minutes
    #[must_use]
    pub fn minute(&self) -> i64 {
        self.components.minute
    }

    /// Seconds
    #[must_use]
    pub fn second(&self) -> i64 {
        self.components.second
    }

    /// Frames
    #[must_use]
    pub fn frame(&self) -> i64 {
        self.components.frame
    }

    /// Subframes
    #[must_use]
    pub fn subframe(&self) -> i64 {
        self.components.subframe
    }

    /// Whether every field is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.components.is_zero()
    }

    // ===== Validation =====

    /// Whether every field is within range.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        validation::is_valid(&self.components, &self.properties)
    }

    /// Fields that are out of range, most significant first.
    #[must_use]
    pub fn invalid_components(&self) -> Vec<TimecodeField> {
        validation::invalid_fields(&self.components, &self.properties)
    }

    /// Allowed values of `field` given the current value of the others.
    #[must_use]
    pub fn valid_range(&self, field: TimecodeField) -> RangeInclusive<i64> {
        validation::valid_range(field, &self.components, &self.properties)
    }

    // ===== Conversions =====

    /// Elapsed frames since zero
    #[must_use]
    pub fn frame_count(&self) -> FrameCount {
        frames::frame_count(&self.components, &self.properties)
    }

    /// Elapsed wall-clock seconds
    #[must_use]
    pub fn real_time_value(&self) -> f64 {
        real_time::real_time_value(&self.frame_count(), self.frame_rate())
    }

    /// Exact elapsed seconds as a fraction
    #[must_use]
    pub fn rational_value(&self) -> Fraction {
        rational::rational_value(&self.frame_count(), self.frame_rate())
    }

    /// Elapsed whole audio samples at `sample_rate` Hz
    #[must_use]
    pub fn samples_value(&self, sample_rate: u32) -> i64 {
        samples::samples_value(&self.frame_count(), self.frame_rate(), sample_rate)
    }

    /// Elapsed audio samples at `sample_rate` Hz, with the fractional sample
    #[must_use]
    pub fn samples_double_value(&self, sample_rate: u32) -> f64 {
        samples::samples_double_value(&self.frame_count(), self.frame_rate(), sample_rate)
    }

    /// Display string
    #[must_use]
    pub fn string_value(&self, format: StringFormat) -> String {
        string::encode(&self.components, &self.properties, format)
    }

    /// Display string safe for use in file names
    #[must_use]
    pub fn filename_value(&self) -> String {
        self.string_value(StringFormat::FILENAME)
    }
}

impl Default for Timecode {
    fn default() -> Self {
        Self::zero(TimecodeProperties::default())
    }
}

impl std::fmt::Display for Timecode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.string_value(StringFormat::DEFAULT))
    }
}
