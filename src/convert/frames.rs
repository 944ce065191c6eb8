//! Components ⇄ elapsed frame count
//!
//! All arithmetic is done in `i128` scaled integers: frames are counted at
//! the integral bucket size and drop-frame rates subtract the skipped frame
//! numbers afterwards, so no binary floating point is involved at any range.
//!
//! ```text
//! drop-frame:  elapsed = naive - dropped * (minutes - minutes / 10)
//! inverse:     naive   = elapsed + 9 * dropped * d
//!                                + dropped * ((m - dropped).max(0) / ((per10 - dropped) / 10))
//!              where d = elapsed / per10, m = elapsed % per10
//! ```

use crate::rate::{FrameRate, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE};
use crate::types::{Components, FrameCount, TimecodeProperties};

/// Elapsed frame count for a set of components.
///
/// Fields may be out of range; they contribute proportionally. A value whose
/// only negative field is the most significant nonzero one is a negative
/// duration: the magnitudes of all fields are converted and the result
/// negated. Values with any other mix of signs are summed field by field.
#[must_use]
pub fn frame_count(components: &Components, properties: &TimecodeProperties) -> FrameCount {
    let total = if components.is_sign_normalized() {
        let magnitude = total_sub_frames(&Fields::magnitude(components), properties);
        if components.is_negative() {
            -magnitude
        } else {
            magnitude
        }
    } else {
        signed_total_sub_frames(components, properties)
    };
    FrameCount::from_total_sub_frames(saturate(total), properties.sub_frames_base)
}

/// Whole elapsed frames for a set of components, ignoring subframes.
#[must_use]
pub fn elapsed_frames(components: &Components, properties: &TimecodeProperties) -> i64 {
    frame_count(components, properties).whole_frames()
}

/// Components for an elapsed frame count.
///
/// The frame count is first re-expressed in the subframe base of
/// `properties`. Negative counts produce a value whose most significant
/// nonzero field carries the sign.
#[must_use]
pub fn components(frame_count: &FrameCount, properties: &TimecodeProperties) -> Components {
    let frame_count = frame_count.with_sub_frames_base(properties.sub_frames_base);
    let total = i128::from(frame_count.total_sub_frames());
    let magnitude = components_of_magnitude(total.abs(), properties);
    if total < 0 {
        magnitude.negated_leading()
    } else {
        magnitude
    }
}

// Components widened to `i128` so that no field can overflow.
struct Fields {
    day: i128,
    hour: i128,
    minute: i128,
    second: i128,
    frame: i128,
    subframe: i128,
}

impl Fields {
    fn magnitude(c: &Components) -> Self {
        Self {
            day: i128::from(c.day.unsigned_abs()),
            hour: i128::from(c.hour.unsigned_abs()),
            minute: i128::from(c.minute.unsigned_abs()),
            second: i128::from(c.second.unsigned_abs()),
            frame: i128::from(c.frame.unsigned_abs()),
            subframe: i128::from(c.subframe.unsigned_abs()),
        }
    }

    fn signed(c: &Components) -> Self {
        Self {
            day: i128::from(c.day),
            hour: i128::from(c.hour),
            minute: i128::from(c.minute),
            second: i128::from(c.second),
            frame: i128::from(c.frame),
            subframe: i128::from(c.subframe),
        }
    }

    // Frame numbers counted from zero, drop-frame skips included.
    fn naive_frames(&self, fps: i128) -> i128 {
        let seconds = self.day * i128::from(SECONDS_PER_DAY)
            + self.hour * i128::from(SECONDS_PER_HOUR)
            + self.minute * i128::from(SECONDS_PER_MINUTE)
            + self.second;
        seconds * fps + self.frame
    }
}

fn total_sub_frames(magnitude: &Fields, properties: &TimecodeProperties) -> i128 {
    let rate = properties.frame_rate;
    let mut frames = magnitude.naive_frames(i128::from(rate.elapsed_frames_fps()));

    if rate.is_drop() {
        let total_minutes = magnitude.day * 1440 + magnitude.hour * 60 + magnitude.minute;
        frames -= dropped_before(total_minutes, rate);
    }

    frames * i128::from(properties.sub_frames_base.divisor()) + magnitude.subframe
}

// Mixed signs: the fields are added with carry into one naive frame number,
// and drop-frame skips are taken from the minutes that number spans.
fn signed_total_sub_frames(components: &Components, properties: &TimecodeProperties) -> i128 {
    let rate = properties.frame_rate;
    let base = i128::from(properties.sub_frames_base.divisor());
    let fps = i128::from(rate.elapsed_frames_fps());
    let fields = Fields::signed(components);
    let naive = fields.naive_frames(fps) * base + fields.subframe;
    if !rate.is_drop() {
        return naive;
    }

    let magnitude = naive.abs();
    let frames = magnitude / base;
    let total_minutes = frames / (fps * i128::from(SECONDS_PER_MINUTE));
    let elapsed = (frames - dropped_before(total_minutes, rate)) * base + magnitude % base;
    if naive < 0 { -elapsed } else { elapsed }
}

fn dropped_before(total_minutes: i128, rate: FrameRate) -> i128 {
    i128::from(rate.frames_dropped_per_minute()) * (total_minutes - total_minutes / 10)
}

fn components_of_magnitude(total_sub_frames: i128, properties: &TimecodeProperties) -> Components {
    let base = i128::from(properties.sub_frames_base.divisor());
    let rate = properties.frame_rate;

    let elapsed = total_sub_frames / base;
    let subframe = total_sub_frames % base;
    let naive = if rate.is_drop() {
        reinflate_drop_frames(elapsed, rate)
    } else {
        elapsed
    };

    let fps = i128::from(rate.max_frames());
    let per_day = fps * i128::from(SECONDS_PER_DAY);
    let per_hour = fps * i128::from(SECONDS_PER_HOUR);
    let per_minute = fps * i128::from(SECONDS_PER_MINUTE);

    let day = naive / per_day;
    let rem = naive % per_day;
    let hour = rem / per_hour;
    let rem = rem % per_hour;
    let minute = rem / per_minute;
    let rem = rem % per_minute;
    let second = rem / fps;
    let frame = rem % fps;

    Components {
        day: saturate(day),
        hour: saturate(hour),
        minute: saturate(minute),
        second: saturate(second),
        frame: saturate(frame),
        subframe: saturate(subframe),
    }
}

/// Convert an elapsed (drop-corrected) frame count back to the naive count
/// that includes the skipped frame numbers.
fn reinflate_drop_frames(elapsed: i128, rate: FrameRate) -> i128 {
    let dropped = i128::from(rate.frames_dropped_per_minute());
    let per_10_minutes = i128::from(rate.frames_per_10_minutes());
    let per_minute = (per_10_minutes - dropped) / 10;

    let d = elapsed / per_10_minutes;
    let m = elapsed % per_10_minutes;
    let f = (m - dropped).max(0);
    elapsed + 9 * dropped * d + dropped * (f / per_minute)
}

pub(crate) fn saturate(value: i128) -> i64 {
    i64::try_from(value).unwrap_or(if value < 0 { i64::MIN } else { i64::MAX })
}
