
use crate::rate::{FrameRate, SubFramesBase, UpperLimit};
use crate::types::TimecodeProperties;

fn props(rate: FrameRate) -> TimecodeProperties {
    TimecodeProperties::new(rate)
}

fn props_with(rate: FrameRate, base: SubFramesBase, limit: UpperLimit) -> TimecodeProperties {
    TimecodeProperties::builder()
        .frame_rate(rate)
        .sub_frames_base(base)
        .upper_limit(limit)
        .build()
}
