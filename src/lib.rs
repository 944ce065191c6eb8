//! # timecode
//!
//! Frame-accurate SMPTE-style timecode for video and audio post-production.
//!
//! ## Features
//!
//! - 22 video frame rates, including 29.97, 59.94 and 119.88 drop-frame
//! - Subframes at 100, 80, 50 or 4 per frame
//! - 24-hour or 100-day ranges
//! - Exact conversion between fields, elapsed frames and rational seconds
//! - Biased conversion from wall-clock seconds and audio sample counts
//! - Validation policies: exact, clamp, clamp each field, wrap, allow invalid
//!
//! ## Example
//!
//! ```rust
//! use timecode::{FrameRate, Timecode, Validation};
//!
//! # fn example() -> timecode::Result<()> {
//! let mut tc = Timecode::new("00:00:59;29", FrameRate::Fps29_97Drop)?;
//! tc.offset(1, Validation::Exact)?;
//! assert_eq!(tc.to_string(), "00:01:00;02");
//!
//! // Out-of-range input handled by policy
//! let tc = Timecode::new_by("25:00:00:00", FrameRate::Fps24, Validation::Clamp)?;
//! assert_eq!(tc.to_string(), "23:59:59:23");
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Value**: [`Timecode`] - fields plus the properties they are read at
//! - **Sources**: [`source`] - traits that populate a timecode from other
//!   representations
//! - **Engine**: [`convert`] and [`validation`] - pure conversion and policy
//!   functions over [`Components`] and [`FrameCount`]

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

// Public modules
/// Error types
pub mod error;
pub mod rate;
pub mod types;

pub mod convert;
pub mod source;
pub mod validation;

mod timecode;

// Re-exports
pub use convert::StringFormat;
pub use error::{Result, TimecodeError};
pub use rate::{FrameRate, SubFramesBase, UpperLimit};
pub use source::{
    AssetAttribute, AssetSource, AssetTime, GuaranteedTimecodeSource, MediaAsset, RealTime,
    RichTimecodeSource, Samples, TimecodeSource, ValidatingTimecodeSource, Zero,
};
pub use timecode::Timecode;
pub use types::{
    Components, Fraction, FrameCount, FrameCountValue, TimecodeField, TimecodeProperties,
    TimecodePropertiesBuilder,
};
pub use validation::Validation;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Prelude for common imports
///
/// Convenient re-exports
pub mod prelude {
    pub use crate::{
        Components, Fraction, FrameCount, FrameRate, GuaranteedTimecodeSource, RealTime,
        RichTimecodeSource, Samples, StringFormat, SubFramesBase, Timecode, TimecodeError,
        TimecodeProperties, TimecodeSource, UpperLimit, ValidatingTimecodeSource, Validation,
        Zero,
    };
}
