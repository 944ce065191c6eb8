//! Conversion engine
//!
//! Pure functions between the representations of a timecode. The elapsed
//! [`FrameCount`](crate::types::FrameCount) is the hub: components, real
//! time, rational seconds and sample counts all convert through it.
//!
//! | Module        | From / to                          | Lossless |
//! |---------------|------------------------------------|----------|
//! | [`frames`]    | `Components` ⇄ `FrameCount`        | yes      |
//! | [`rational`]  | `Fraction` ⇄ `FrameCount`          | yes      |
//! | [`real_time`] | seconds (`f64`) ⇄ `FrameCount`     | biased   |
//! | [`samples`]   | sample count ⇄ `FrameCount`        | biased   |
//! | [`string`]    | display string ⇄ `Components`      | yes      |

pub mod frames;
pub mod rational;
pub mod real_time;
pub mod samples;
pub mod string;

#[cfg(test)]
mod tests;

pub use real_time::REAL_TIME_BIAS_SECONDS;
pub use samples::SAMPLES_BIAS_SECONDS;
pub use string::StringFormat;
