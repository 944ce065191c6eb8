//! Frame rate, subframe base and range limit tables
//!
//! These are pure constant tables; every other module is parameterized by
//! them through [`TimecodeProperties`](crate::types::TimecodeProperties).

pub mod frame_rate;
pub mod sub_frames;
pub mod upper_limit;


pub use frame_rate::FrameRate;
pub use sub_frames::SubFramesBase;
pub use upper_limit::UpperLimit;

/// Seconds in one minute of timecode
pub const SECONDS_PER_MINUTE: i64 = 60;
/// Seconds in one hour of timecode
pub const SECONDS_PER_HOUR: i64 = 3_600;
/// Seconds in one day of timecode
pub const SECONDS_PER_DAY: i64 = 86_400;
