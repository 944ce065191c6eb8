//! Validation policies
//!
//! Every source representation ends up as candidate [`Components`]; a
//! [`Validation`] policy turns the candidate into the final value.

use serde::{Deserialize, Serialize};

use crate::convert::frames;
use crate::error::{Result, TimecodeError};
use crate::types::{Components, FrameCount, TimecodeField, TimecodeProperties};

use super::bounds::{invalid_fields, valid_range};

/// How out-of-range values are handled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Validation {
    /// Reject any out-of-range field
    #[default]
    Exact,
    /// Pull the whole value to the nearest valid timecode
    Clamp,
    /// Clamp each field to its own range independently
    ClampComponents,
    /// Wrap around the range, in either direction
    Wrap,
    /// Store the fields verbatim
    AllowInvalid,
}

/// Apply a validation policy to candidate components.
///
/// # Errors
///
/// Returns [`TimecodeError::OutOfBounds`] under [`Validation::Exact`] when any
/// field is out of range. Other policies never fail.
pub fn validate(
    components: Components,
    properties: &TimecodeProperties,
    validation: Validation,
) -> Result<Components> {
    match validation {
        Validation::Exact => exactly(components, properties),
        Validation::Clamp => Ok(clamped(&components, properties)),
        Validation::ClampComponents => Ok(clamped_components(&components, properties)),
        Validation::Wrap => Ok(wrapped(&components, properties)),
        Validation::AllowInvalid => Ok(components),
    }
}

/// Apply a validation policy to a candidate frame count.
///
/// Clamping and wrapping operate on the frame count directly, before it is
/// split into fields.
///
/// # Errors
///
/// Returns [`TimecodeError::OutOfBounds`] under [`Validation::Exact`] when the
/// frame count is outside the range.
pub fn validate_frame_count(
    frame_count: &FrameCount,
    properties: &TimecodeProperties,
    validation: Validation,
) -> Result<Components> {
    match validation {
        Validation::Clamp => Ok(frames::components(
            &clamped_frame_count(frame_count, properties),
            properties,
        )),
        Validation::Wrap => Ok(frames::components(
            &wrapped_frame_count(frame_count, properties),
            properties,
        )),
        Validation::Exact | Validation::ClampComponents | Validation::AllowInvalid => validate(
            frames::components(frame_count, properties),
            properties,
            validation,
        ),
    }
}

/// Accept the components unchanged if every field is in range.
///
/// # Errors
///
/// Returns [`TimecodeError::OutOfBounds`] listing every out-of-range field.
pub fn exactly(components: Components, properties: &TimecodeProperties) -> Result<Components> {
    let fields = invalid_fields(&components, properties);
    if fields.is_empty() {
        Ok(components)
    } else {
        tracing::trace!(?components, ?fields, "timecode out of bounds");
        Err(TimecodeError::OutOfBounds { fields })
    }
}

/// Pull the whole value to the nearest valid timecode.
///
/// The candidate is read as a delta from zero. Values below zero become zero;
/// values past the end become the last whole frame of the range.
#[must_use]
pub fn clamped(components: &Components, properties: &TimecodeProperties) -> Components {
    let frame_count = frames::frame_count(components, properties);
    let result = frames::components(&clamped_frame_count(&frame_count, properties), properties);
    if result != *components {
        tracing::debug!(from = ?components, to = ?result, "clamped timecode");
    }
    result
}

/// Clamp every field to its own range, ignoring the others.
#[must_use]
pub fn clamped_components(components: &Components, properties: &TimecodeProperties) -> Components {
    let mut result = *components;
    for field in TimecodeField::ALL {
        // ranges are read from `result` so the frames field sees clamped
        // minutes and seconds
        let range = valid_range(field, &result, properties);
        result.set(field, result.get(field).clamp(*range.start(), *range.end()));
    }
    if result != *components {
        tracing::debug!(from = ?components, to = ?result, "clamped timecode fields");
    }
    result
}

/// Wrap the value around the range.
///
/// The candidate is read as a delta from zero; values past the end continue
/// from zero, negative values count back from the end.
#[must_use]
pub fn wrapped(components: &Components, properties: &TimecodeProperties) -> Components {
    let frame_count = frames::frame_count(components, properties);
    let result = frames::components(&wrapped_frame_count(&frame_count, properties), properties);
    if result != *components {
        tracing::debug!(from = ?components, to = ?result, "wrapped timecode");
    }
    result
}

/// Frame count saturated to `0 ..= last whole frame`.
///
/// Values inside the last frame keep their subframes.
#[must_use]
pub fn clamped_frame_count(
    frame_count: &FrameCount,
    properties: &TimecodeProperties,
) -> FrameCount {
    let base = properties.sub_frames_base;
    let total = frame_count.with_sub_frames_base(base).total_sub_frames();
    let end = properties.max_total_sub_frames();
    let clamped = if total < 0 {
        0
    } else if total >= end {
        end - base.divisor()
    } else {
        total
    };
    FrameCount::from_total_sub_frames(clamped, base)
}

/// Frame count wrapped modulo the range.
#[must_use]
pub fn wrapped_frame_count(
    frame_count: &FrameCount,
    properties: &TimecodeProperties,
) -> FrameCount {
    let base = properties.sub_frames_base;
    let total = frame_count.with_sub_frames_base(base).total_sub_frames();
    let wrapped = total.rem_euclid(properties.max_total_sub_frames());
    FrameCount::from_total_sub_frames(wrapped, base)
}
