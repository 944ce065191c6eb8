//! Valid ranges of the timecode fields

use std::ops::RangeInclusive;

use crate::types::{Components, TimecodeField, TimecodeProperties};

/// Range of values a field may take.
///
/// For drop-frame rates the frames range depends on the rest of the value:
/// the first `frames_dropped_per_minute` frame numbers do not exist at
/// second zero of any minute that is not a multiple of ten.
#[must_use]
pub fn valid_range(
    field: TimecodeField,
    components: &Components,
    properties: &TimecodeProperties,
) -> RangeInclusive<i64> {
    match field {
        TimecodeField::Day => 0..=properties.upper_limit.max_day_value(),
        TimecodeField::Hour => 0..=23,
        TimecodeField::Minute | TimecodeField::Second => 0..=59,
        TimecodeField::Frame => {
            let rate = properties.frame_rate;
            let max = rate.max_frames() - 1;
            if is_drop_slot(components, properties) {
                rate.frames_dropped_per_minute()..=max
            } else {
                0..=max
            }
        }
        TimecodeField::SubFrame => 0..=properties.sub_frames_base.max_sub_frames(),
    }
}

/// Fields whose values fall outside their valid range, most significant first.
#[must_use]
pub fn invalid_fields(
    components: &Components,
    properties: &TimecodeProperties,
) -> Vec<TimecodeField> {
    TimecodeField::ALL
        .iter()
        .copied()
        .filter(|&field| {
            !valid_range(field, components, properties).contains(&components.get(field))
        })
        .collect()
}

/// Whether every field is within its valid range.
#[must_use]
pub fn is_valid(components: &Components, properties: &TimecodeProperties) -> bool {
    invalid_fields(components, properties).is_empty()
}

fn is_drop_slot(components: &Components, properties: &TimecodeProperties) -> bool {
    properties.frame_rate.is_drop() && components.second == 0 && components.minute % 10 != 0
}
