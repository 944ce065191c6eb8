//! Frame count ⇄ rational seconds
//!
//! Rational time is `frame_duration * elapsed_frames`, which is how media
//! containers express edit points (a value over a timescale).

use crate::rate::FrameRate;
use crate::types::fraction::reduce_by_common_factors;
use crate::types::{Fraction, FrameCount, TimecodeProperties};

use super::frames::saturate;

/// Rational seconds for a frame count.
///
/// The result is only reduced by common factors of 10 and 2 (see
/// [`Fraction::reduced_by_common_factors`]); call [`Fraction::reduced`] for
/// the lowest terms. Terms that do not fit in an `i64` after reduction
/// saturate.
#[must_use]
pub fn rational_value(frame_count: &FrameCount, frame_rate: FrameRate) -> Fraction {
    let duration = frame_rate.frame_duration();
    let (numer, denom) = (i128::from(*duration.numer()), i128::from(*duration.denom()));
    let (numerator, denominator) = if frame_count.sub_frames() == 0 {
        (numer * i128::from(frame_count.whole_frames()), denom)
    } else {
        let base = i128::from(frame_count.sub_frames_base.divisor());
        (numer * i128::from(frame_count.total_sub_frames()), denom * base)
    };
    let (numerator, denominator) = reduce_by_common_factors(numerator, denominator);
    Fraction::new(saturate(numerator), saturate(denominator))
}

/// Whole frames contained in rational seconds, truncated toward zero.
///
/// A zero denominator saturates by the sign of the numerator.
#[must_use]
pub fn elapsed_frames(fraction: &Fraction, frame_rate: FrameRate) -> i64 {
    let duration = frame_rate.frame_duration();
    divide(
        i128::from(fraction.numerator) * i128::from(*duration.denom()),
        i128::from(fraction.denominator) * i128::from(*duration.numer()),
    )
}

/// Frame count, including subframes, for rational seconds.
///
/// Subframes are truncated toward zero. A zero denominator saturates by the
/// sign of the numerator.
#[must_use]
pub fn frame_count(fraction: &Fraction, properties: &TimecodeProperties) -> FrameCount {
    let duration = properties.frame_rate.frame_duration();
    let base = properties.sub_frames_base.divisor();
    let total = divide(
        i128::from(fraction.numerator) * i128::from(*duration.denom()) * i128::from(base),
        i128::from(fraction.denominator) * i128::from(*duration.numer()),
    );
    FrameCount::from_total_sub_frames(total, properties.sub_frames_base)
}

fn divide(numerator: i128, denominator: i128) -> i64 {
    if denominator == 0 {
        return saturate(numerator.signum() * i128::from(i64::MAX));
    }
    saturate(numerator / denominator)
}
