//! Frame count ⇄ wall-clock seconds

use crate::rate::FrameRate;
use crate::types::{FrameCount, TimecodeProperties};

/// Bias applied to seconds before converting to frames.
///
/// Seconds computed from a frame count can land a hair below the frame
/// boundary once round-tripped through `f64`; the bias pushes them back over
/// it. Added for non-negative input, subtracted for negative input.
pub const REAL_TIME_BIAS_SECONDS: f64 = 0.000_010;

/// Wall-clock seconds elapsed for a frame count, including subframes.
#[must_use]
pub fn real_time_value(frame_count: &FrameCount, frame_rate: FrameRate) -> f64 {
    frame_count.double_value() / frame_rate.real_time_fps()
}

/// Frame count for wall-clock seconds.
///
/// Lossy: the result is truncated to whole subframes after applying
/// [`REAL_TIME_BIAS_SECONDS`].
#[must_use]
pub fn frame_count(seconds: f64, properties: &TimecodeProperties) -> FrameCount {
    biased_frame_count(seconds, REAL_TIME_BIAS_SECONDS, properties)
}

pub(crate) fn biased_frame_count(
    seconds: f64,
    bias: f64,
    properties: &TimecodeProperties,
) -> FrameCount {
    let biased = if seconds >= 0.0 {
        seconds + bias
    } else {
        seconds - bias
    };
    let frames = biased * properties.frame_rate.real_time_fps();
    FrameCount::combined(frames, properties.sub_frames_base)
}
