//! Frame count ⇄ audio sample count

use crate::rate::FrameRate;
use crate::types::{FrameCount, TimecodeProperties};

use super::frames::saturate;
use super::real_time::biased_frame_count;

/// Bias applied to seconds derived from a sample count before converting to
/// frames. Larger than the real-time bias since the sample domain adds a
/// rounding step.
pub const SAMPLES_BIAS_SECONDS: f64 = 0.000_100;

/// Audio samples elapsed for a frame count, truncated toward zero.
///
/// Computed exactly from the rational frame duration.
#[must_use]
pub fn samples_value(frame_count: &FrameCount, frame_rate: FrameRate, sample_rate: u32) -> i64 {
    let (numerator, denominator) = sample_ratio(frame_count, frame_rate, sample_rate);
    saturate(numerator / denominator)
}

/// Audio samples elapsed for a frame count, with the fractional sample.
#[allow(clippy::cast_precision_loss)]
#[must_use]
pub fn samples_double_value(
    frame_count: &FrameCount,
    frame_rate: FrameRate,
    sample_rate: u32,
) -> f64 {
    let (numerator, denominator) = sample_ratio(frame_count, frame_rate, sample_rate);
    let whole = numerator / denominator;
    let rem = numerator % denominator;
    whole as f64 + rem as f64 / denominator as f64
}

/// Frame count for an audio sample count at `sample_rate` Hz.
///
/// Lossy: seconds are biased by [`SAMPLES_BIAS_SECONDS`] and the frame count
/// truncated to whole subframes. A zero sample rate yields zero.
#[must_use]
pub fn frame_count(samples: f64, sample_rate: u32, properties: &TimecodeProperties) -> FrameCount {
    if sample_rate == 0 {
        return FrameCount::frames(0, properties.sub_frames_base);
    }
    let seconds = samples / f64::from(sample_rate);
    biased_frame_count(seconds, SAMPLES_BIAS_SECONDS, properties)
}

// samples = total_sub_frames * duration_numer * sample_rate / (duration_denom * base)
fn sample_ratio(frame_count: &FrameCount, frame_rate: FrameRate, sample_rate: u32) -> (i128, i128) {
    let duration = frame_rate.frame_duration();
    let numerator = i128::from(frame_count.total_sub_frames())
        * i128::from(*duration.numer())
        * i128::from(sample_rate);
    let denominator =
        i128::from(*duration.denom()) * i128::from(frame_count.sub_frames_base.divisor());
    (numerator, denominator)
}
