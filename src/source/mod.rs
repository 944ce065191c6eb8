//! Timecode sources
//!
//! Anything that can populate a [`Timecode`] implements one or more of four
//! capability traits:
//!
//! | Trait                        | Fails?                 | Properties      |
//! |------------------------------|------------------------|-----------------|
//! | [`TimecodeSource`]           | when out of bounds     | the timecode's  |
//! | [`ValidatingTimecodeSource`] | only under `Exact`     | the timecode's  |
//! | [`GuaranteedTimecodeSource`] | never                  | the timecode's  |
//! | [`RichTimecodeSource`]       | never                  | the source's    |
//!
//! Malformed strings and assets without an embedded timecode fail under
//! every policy.

pub mod asset;
pub mod values;


pub use asset::{AssetAttribute, AssetSource, AssetTime, FallbackToZero, MediaAsset};
pub use values::{RealTime, Samples, Zero};

use crate::error::Result;
use crate::timecode::Timecode;
use crate::types::TimecodeProperties;
use crate::validation::Validation;

/// A source that is either exactly valid or rejected.
pub trait TimecodeSource {
    /// Replace the value of `timecode`, keeping its properties.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is out of bounds for the timecode's
    /// properties or cannot be read.
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()>;
}

/// A source whose out-of-range values are handled by a [`Validation`]
/// policy.
pub trait ValidatingTimecodeSource {
    /// Replace the value of `timecode`, keeping its properties.
    ///
    /// # Errors
    ///
    /// Returns an error under [`Validation::Exact`] if the value is out of
    /// bounds, or under any policy if the value cannot be read.
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()>;
}

/// A source that always produces a valid value.
pub trait GuaranteedTimecodeSource {
    /// Replace the value of `timecode`, keeping its properties.
    fn set_timecode_guaranteed(&self, timecode: &mut Timecode);
}

/// A source that always produces a valid value and carries its own
/// properties.
pub trait RichTimecodeSource {
    /// Replace both the value and the properties of `timecode`.
    ///
    /// Returns the properties now in effect.
    fn set_timecode_rich(&self, timecode: &mut Timecode) -> TimecodeProperties;
}

impl<T: TimecodeSource + ?Sized> TimecodeSource for &T {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        (**self).set_timecode(timecode)
    }
}

impl<T: ValidatingTimecodeSource + ?Sized> ValidatingTimecodeSource for &T {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        (**self).set_timecode_by(timecode, validation)
    }
}

impl<T: GuaranteedTimecodeSource + ?Sized> GuaranteedTimecodeSource for &T {
    fn set_timecode_guaranteed(&self, timecode: &mut Timecode) {
        (**self).set_timecode_guaranteed(timecode);
    }
}

impl<T: RichTimecodeSource + ?Sized> RichTimecodeSource for &T {
    fn set_timecode_rich(&self, timecode: &mut Timecode) -> TimecodeProperties {
        (**self).set_timecode_rich(timecode)
    }
}
