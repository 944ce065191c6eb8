
use crate::rate::{FrameRate, UpperLimit};
use crate::timecode::Timecode;
use crate::types::TimecodeProperties;

fn tc(input: &str, rate: FrameRate) -> Timecode {
    Timecode::new(input, rate).unwrap()
}

fn days(rate: FrameRate) -> TimecodeProperties {
    TimecodeProperties::builder()
        .frame_rate(rate)
        .upper_limit(UpperLimit::Max100Days)
        .build()
}
