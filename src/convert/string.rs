//! Timecode display strings
//!
//! Format: `[D ]HH:MM:SS[:;]FF[.SF]`
//!
//! - the day prefix is only written when the day field is non-zero
//! - `;` separates frames for drop-frame rates, `:` otherwise
//! - frames are padded to the rate's digit width (2 or 3)
//! - subframes are only written when requested
//!
//! Decoding also accepts `D:HH:MM:SS:FF` (a fifth colon-separated group is
//! the day) and `;` in any separator position.

use std::fmt::Write as _;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TimecodeError};
use crate::types::{Components, TimecodeProperties};

static TIMECODE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(-)?(?:(\d+)[:; ])?(\d+)[:;](\d+)[:;](\d+)[:;](\d+)(?:\.(\d+))?$")
        .expect("timecode pattern is valid")
});

/// Options for rendering a timecode string
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct StringFormat {
    /// Append `.SF` subframes
    pub show_sub_frames: bool,
    /// Replace `:`, `;` and space separators with `-`
    pub filename_compatible: bool,
}

impl StringFormat {
    /// `HH:MM:SS:FF`
    pub const DEFAULT: Self = Self {
        show_sub_frames: false,
        filename_compatible: false,
    };

    /// `HH:MM:SS:FF.SF`
    pub const WITH_SUB_FRAMES: Self = Self {
        show_sub_frames: true,
        filename_compatible: false,
    };

    /// `HH-MM-SS-FF`
    pub const FILENAME: Self = Self {
        show_sub_frames: false,
        filename_compatible: true,
    };

    /// Enable or disable subframes
    #[must_use]
    pub fn sub_frames(mut self, show: bool) -> Self {
        self.show_sub_frames = show;
        self
    }

    /// Enable or disable filename-safe separators
    #[must_use]
    pub fn filename(mut self, compatible: bool) -> Self {
        self.filename_compatible = compatible;
        self
    }
}

/// Render components as a timecode string.
///
/// A negative duration is written as `-` followed by its magnitude. Values
/// with mixed field signs are written field by field as given.
#[must_use]
pub fn encode(
    components: &Components,
    properties: &TimecodeProperties,
    format: StringFormat,
) -> String {
    let (sign, c) = if components.is_sign_normalized() && components.is_negative() {
        ("-", components.magnitude())
    } else {
        ("", *components)
    };
    let frame_separator = if properties.frame_rate.is_drop() {
        ';'
    } else {
        ':'
    };
    let frame_digits = properties.frame_rate.number_of_digits();

    let mut out = String::with_capacity(24);
    out.push_str(sign);
    // Writing into a `String` cannot fail.
    if c.day != 0 {
        let _ = write!(out, "{} ", c.day);
    }
    let _ = write!(
        out,
        "{:02}:{:02}:{:02}{frame_separator}{:0frame_digits$}",
        c.hour, c.minute, c.second, c.frame
    );
    if format.show_sub_frames {
        let sub_digits = properties.sub_frames_base.number_of_digits();
        let _ = write!(out, ".{:0sub_digits$}", c.subframe);
    }

    if format.filename_compatible {
        out.chars()
            .map(|ch| if matches!(ch, ':' | ';' | ' ') { '-' } else { ch })
            .collect()
    } else {
        out
    }
}

/// Parse a timecode string into raw, unvalidated components.
///
/// # Errors
///
/// Returns [`TimecodeError::MalformedString`] if the string does not match
/// the timecode pattern or a field does not fit in an `i64`.
pub fn decode(input: &str) -> Result<Components> {
    let malformed = || TimecodeError::MalformedString {
        input: input.to_string(),
    };

    let Some(caps) = TIMECODE_PATTERN.captures(input.trim()) else {
        tracing::debug!(input, "timecode string does not match pattern");
        return Err(malformed());
    };

    let groups: Vec<Option<i64>> = (2..=7)
        .map(|i| caps.get(i).map(|m| m.as_str().parse::<i64>()).transpose())
        .collect::<std::result::Result<_, _>>()
        .map_err(|_| malformed())?;

    let captured = groups.iter().flatten().count();
    if !(4..=6).contains(&captured) {
        return Err(malformed());
    }

    let field = |i: usize| groups[i].unwrap_or(0);
    let components = Components::new(field(0), field(1), field(2), field(3), field(4), field(5));

    if caps.get(1).is_some() {
        Ok(components.negated_leading())
    } else {
        Ok(components)
    }
}
