//! Media asset adapter
//!
//! Platform media containers expose their embedded start timecode, end
//! timecode and duration as a rational `value / timescale` pair. This module
//! defines the boundary such containers implement; reading the container
//! itself is left to the implementor.

use serde::{Deserialize, Serialize};

use super::{GuaranteedTimecodeSource, TimecodeSource, ValidatingTimecodeSource};
use crate::error::{Result, TimecodeError};
use crate::rate::FrameRate;
use crate::timecode::Timecode;
use crate::types::{Components, Fraction};
use crate::validation::Validation;

/// A time read from a media container: `value / timescale` seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct AssetTime {
    /// Time value in timescale units
    pub value: i64,
    /// Units per second
    pub timescale: i32,
}

impl AssetTime {
    /// Create a new asset time
    #[must_use]
    pub fn new(value: i64, timescale: i32) -> Self {
        Self { value, timescale }
    }

    /// The time as a rational number of seconds.
    #[must_use]
    pub fn fraction(&self) -> Fraction {
        Fraction::new(self.value, i64::from(self.timescale))
    }
}

impl From<AssetTime> for Fraction {
    fn from(time: AssetTime) -> Self {
        time.fraction()
    }
}

/// Which embedded time to read from an asset
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AssetAttribute {
    /// Timecode of the first frame
    Start,
    /// Timecode after the last frame
    End,
    /// Length of the media
    Duration,
}

/// A media container with (possibly) embedded timecode
pub trait MediaAsset {
    /// The embedded time for `attribute`, or `None` if the asset has none.
    fn timecode_time(&self, attribute: AssetAttribute) -> Option<AssetTime>;

    /// The asset's native video frame rate, if known.
    fn frame_rate(&self) -> Option<FrameRate> {
        None
    }
}

/// Reads one attribute of a [`MediaAsset`] as a timecode source.
///
/// Fails with [`TimecodeError::UnknownTimecode`] when the asset has no
/// embedded value. Use [`AssetSource::or_zero`] for a source that falls back
/// to zero instead.
#[derive(Debug)]
pub struct AssetSource<'a, A: ?Sized> {
    asset: &'a A,
    attribute: AssetAttribute,
}

impl<A: ?Sized> Clone for AssetSource<'_, A> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<A: ?Sized> Copy for AssetSource<'_, A> {}

impl<'a, A: MediaAsset + ?Sized> AssetSource<'a, A> {
    /// Create a source reading `attribute` from `asset`
    #[must_use]
    pub fn new(asset: &'a A, attribute: AssetAttribute) -> Self {
        Self { asset, attribute }
    }

    /// Start timecode of `asset`
    #[must_use]
    pub fn start(asset: &'a A) -> Self {
        Self::new(asset, AssetAttribute::Start)
    }

    /// End timecode of `asset`
    #[must_use]
    pub fn end(asset: &'a A) -> Self {
        Self::new(asset, AssetAttribute::End)
    }

    /// Duration of `asset`
    #[must_use]
    pub fn duration(asset: &'a A) -> Self {
        Self::new(asset, AssetAttribute::Duration)
    }

    /// The attribute being read
    #[must_use]
    pub fn attribute(&self) -> AssetAttribute {
        self.attribute
    }

    /// The embedded time as a fraction of seconds.
    ///
    /// # Errors
    ///
    /// Returns [`TimecodeError::UnknownTimecode`] if the asset has no value
    /// for the attribute.
    pub fn fraction(&self) -> Result<Fraction> {
        match self.asset.timecode_time(self.attribute) {
            Some(time) => Ok(time.fraction()),
            None => {
                tracing::debug!(attribute = ?self.attribute, "asset has no embedded timecode");
                Err(TimecodeError::UnknownTimecode)
            }
        }
    }

    /// A guaranteed source that reads zero when the asset has no value.
    #[must_use]
    pub fn or_zero(self) -> FallbackToZero<'a, A> {
        FallbackToZero { source: self }
    }
}

impl<A: MediaAsset + ?Sized> TimecodeSource for AssetSource<'_, A> {
    fn set_timecode(&self, timecode: &mut Timecode) -> Result<()> {
        self.set_timecode_by(timecode, Validation::Exact)
    }
}

impl<A: MediaAsset + ?Sized> ValidatingTimecodeSource for AssetSource<'_, A> {
    fn set_timecode_by(&self, timecode: &mut Timecode, validation: Validation) -> Result<()> {
        self.fraction()?.set_timecode_by(timecode, validation)
    }
}

/// An [`AssetSource`] that falls back to zero.
///
/// Embedded values outside the range are clamped.
#[derive(Debug)]
pub struct FallbackToZero<'a, A: ?Sized> {
    source: AssetSource<'a, A>,
}

impl<A: MediaAsset + ?Sized> GuaranteedTimecodeSource for FallbackToZero<'_, A> {
    fn set_timecode_guaranteed(&self, timecode: &mut Timecode) {
        let read = self
            .source
            .fraction()
            .and_then(|fraction| fraction.set_timecode_by(timecode, Validation::Clamp));
        if read.is_err() {
            timecode.replace_components(Components::ZERO);
        }
    }
}
