//! Arithmetic, comparison and rate conversion
//!
//! Arithmetic happens on the frame-count axis at the left operand's
//! properties; the right operand is read under
//! [`Validation::AllowInvalid`] so durations longer than the range still
//! contribute in full. The result is validated by the caller's policy.

use std::cmp::Ordering;

use super::Timecode;
use crate::convert::frames::saturate;
use crate::error::Result;
use crate::rate::FrameRate;
use crate::source::{RealTime, ValidatingTimecodeSource};
use crate::types::{FrameCount, TimecodeProperties};
use crate::validation::{Validation, validate_frame_count};

impl Timecode {
    /// Sum of this timecode and a duration read from `operand`.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TimecodeError::OutOfBounds`] under
    /// [`Validation::Exact`] if the sum leaves the range, or the operand's
    /// error if it cannot be read.
    pub fn adding(
        &self,
        operand: impl ValidatingTimecodeSource,
        validation: Validation,
    ) -> Result<Self> {
        let operand = self.operand_sub_frames(operand)?;
        let total = i128::from(self.frame_count().total_sub_frames()) + operand;
        self.with_total_sub_frames(total, validation)
    }

    /// Difference of this timecode and a duration read from `operand`.
    ///
    /// # Errors
    ///
    /// See [`Timecode::adding`].
    pub fn subtracting(
        &self,
        operand: impl ValidatingTimecodeSource,
        validation: Validation,
    ) -> Result<Self> {
        let operand = self.operand_sub_frames(operand)?;
        let total = i128::from(self.frame_count().total_sub_frames()) - operand;
        self.with_total_sub_frames(total, validation)
    }

    /// Add a duration in place. Unchanged on error.
    ///
    /// # Errors
    ///
    /// See [`Timecode::adding`].
    pub fn add(
        &mut self,
        operand: impl ValidatingTimecodeSource,
        validation: Validation,
    ) -> Result<()> {
        *self = self.adding(operand, validation)?;
        Ok(())
    }

    /// Subtract a duration in place. Unchanged on error.
    ///
    /// # Errors
    ///
    /// See [`Timecode::adding`].
    pub fn subtract(
        &mut self,
        operand: impl ValidatingTimecodeSource,
        validation: Validation,
    ) -> Result<()> {
        *self = self.subtracting(operand, validation)?;
        Ok(())
    }

    /// Move by a signed number of whole frames in place. Unchanged on error.
    ///
    /// # Errors
    ///
    /// See [`Timecode::adding`].
    pub fn offset(&mut self, frames: i64, validation: Validation) -> Result<()> {
        self.add(FrameCount::frames(frames, self.sub_frames_base()), validation)
    }

    /// Order two timecodes in time.
    ///
    /// Timecodes with the same properties are ordered by frame count; others
    /// by real time.
    #[must_use]
    pub fn compare(&self, other: &Self) -> Ordering {
        if self.properties == other.properties {
            self.frame_count().cmp(&other.frame_count())
        } else {
            self.real_time_value().total_cmp(&other.real_time_value())
        }
    }

    /// The same point in real time at another frame rate.
    ///
    /// Subframe base and upper limit are kept.
    ///
    /// # Errors
    ///
    /// Returns [`crate::TimecodeError::OutOfBounds`] under
    /// [`Validation::Exact`] if the time does not fit the new rate's range.
    pub fn converted(&self, frame_rate: FrameRate, validation: Validation) -> Result<Self> {
        let properties = TimecodeProperties {
            frame_rate,
            ..self.properties
        };
        Self::new_by(RealTime(self.real_time_value()), properties, validation)
    }

    fn operand_sub_frames(&self, operand: impl ValidatingTimecodeSource) -> Result<i128> {
        let operand = Self::new_by(operand, self.properties, Validation::AllowInvalid)?;
        Ok(i128::from(operand.frame_count().total_sub_frames()))
    }

    fn with_total_sub_frames(&self, total: i128, validation: Validation) -> Result<Self> {
        let frame_count =
            FrameCount::from_total_sub_frames(saturate(total), self.sub_frames_base());
        let components = validate_frame_count(&frame_count, &self.properties, validation)?;
        Ok(Self {
            components,
            properties: self.properties,
        })
    }
}
