//! Frame rate definitions
//!
//! Every supported rate is a variant of [`FrameRate`]. Rates whose names carry
//! a fractional part (23.976, 29.97, ...) run at `n / 1.001` frames per second
//! in real time but are counted in timecode at the integral bucket size `n`.
//! Drop-frame variants additionally skip frame numbers at most minute
//! boundaries so that timecode stays aligned with wall-clock time.

use num_rational::Ratio;
use serde::{Deserialize, Serialize};

use super::UpperLimit;

/// Supported timecode frame rates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FrameRate {
    /// 23.976 fps (24 / 1.001)
    Fps23_976,
    /// 24 fps
    #[default]
    Fps24,
    /// 24.98 fps (25 / 1.001)
    Fps24_98,
    /// 25 fps (PAL)
    Fps25,
    /// 29.97 fps non-drop (30 / 1.001)
    Fps29_97,
    /// 29.97 fps drop-frame (NTSC)
    Fps29_97Drop,
    /// 30 fps
    Fps30,
    /// 30 fps drop-frame
    Fps30Drop,
    /// 47.952 fps (48 / 1.001)
    Fps47_952,
    /// 48 fps
    Fps48,
    /// 50 fps
    Fps50,
    /// 59.94 fps non-drop (60 / 1.001)
    Fps59_94,
    /// 59.94 fps drop-frame
    Fps59_94Drop,
    /// 60 fps
    Fps60,
    /// 60 fps drop-frame
    Fps60Drop,
    /// 95.904 fps (96 / 1.001)
    Fps95_904,
    /// 96 fps
    Fps96,
    /// 100 fps
    Fps100,
    /// 119.88 fps non-drop (120 / 1.001)
    Fps119_88,
    /// 119.88 fps drop-frame
    Fps119_88Drop,
    /// 120 fps
    Fps120,
    /// 120 fps drop-frame
    Fps120Drop,
}

impl FrameRate {
    /// All supported rates, in ascending order.
    pub const ALL: [FrameRate; 22] = [
        FrameRate::Fps23_976,
        FrameRate::Fps24,
        FrameRate::Fps24_98,
        FrameRate::Fps25,
        FrameRate::Fps29_97,
        FrameRate::Fps29_97Drop,
        FrameRate::Fps30,
        FrameRate::Fps30Drop,
        FrameRate::Fps47_952,
        FrameRate::Fps48,
        FrameRate::Fps50,
        FrameRate::Fps59_94,
        FrameRate::Fps59_94Drop,
        FrameRate::Fps60,
        FrameRate::Fps60Drop,
        FrameRate::Fps95_904,
        FrameRate::Fps96,
        FrameRate::Fps100,
        FrameRate::Fps119_88,
        FrameRate::Fps119_88Drop,
        FrameRate::Fps120,
        FrameRate::Fps120Drop,
    ];

    /// Number of frame numbers in one second of timecode (`0..max_frames`).
    #[must_use]
    pub fn max_frames(self) -> i64 {
        match self {
            FrameRate::Fps23_976 | FrameRate::Fps24 => 24,
            FrameRate::Fps24_98 | FrameRate::Fps25 => 25,
            FrameRate::Fps29_97
            | FrameRate::Fps29_97Drop
            | FrameRate::Fps30
            | FrameRate::Fps30Drop => 30,
            FrameRate::Fps47_952 | FrameRate::Fps48 => 48,
            FrameRate::Fps50 => 50,
            FrameRate::Fps59_94
            | FrameRate::Fps59_94Drop
            | FrameRate::Fps60
            | FrameRate::Fps60Drop => 60,
            FrameRate::Fps95_904 | FrameRate::Fps96 => 96,
            FrameRate::Fps100 => 100,
            FrameRate::Fps119_88
            | FrameRate::Fps119_88Drop
            | FrameRate::Fps120
            | FrameRate::Fps120Drop => 120,
        }
    }

    /// Whether the rate runs 1.001 times slower than its frame bucket.
    #[must_use]
    pub fn is_fractional(self) -> bool {
        matches!(
            self,
            FrameRate::Fps23_976
                | FrameRate::Fps24_98
                | FrameRate::Fps29_97
                | FrameRate::Fps29_97Drop
                | FrameRate::Fps47_952
                | FrameRate::Fps59_94
                | FrameRate::Fps59_94Drop
                | FrameRate::Fps95_904
                | FrameRate::Fps119_88
                | FrameRate::Fps119_88Drop
        )
    }

    /// Whether this is a drop-frame rate.
    #[must_use]
    pub fn is_drop(self) -> bool {
        matches!(
            self,
            FrameRate::Fps29_97Drop
                | FrameRate::Fps30Drop
                | FrameRate::Fps59_94Drop
                | FrameRate::Fps60Drop
                | FrameRate::Fps119_88Drop
                | FrameRate::Fps120Drop
        )
    }

    /// Frame numbers skipped at the start of each non-tenth minute.
    ///
    /// Zero for non-drop rates.
    #[must_use]
    pub fn frames_dropped_per_minute(self) -> i64 {
        match self {
            FrameRate::Fps29_97Drop | FrameRate::Fps30Drop => 2,
            FrameRate::Fps59_94Drop | FrameRate::Fps60Drop => 4,
            FrameRate::Fps119_88Drop | FrameRate::Fps120Drop => 8,
            FrameRate::Fps23_976
            | FrameRate::Fps24
            | FrameRate::Fps24_98
            | FrameRate::Fps25
            | FrameRate::Fps29_97
            | FrameRate::Fps30
            | FrameRate::Fps47_952
            | FrameRate::Fps48
            | FrameRate::Fps50
            | FrameRate::Fps59_94
            | FrameRate::Fps60
            | FrameRate::Fps95_904
            | FrameRate::Fps96
            | FrameRate::Fps100
            | FrameRate::Fps119_88
            | FrameRate::Fps120 => 0,
        }
    }

    /// Digits used to display the frames field.
    #[must_use]
    pub fn number_of_digits(self) -> usize {
        match self {
            FrameRate::Fps100
            | FrameRate::Fps119_88
            | FrameRate::Fps119_88Drop
            | FrameRate::Fps120
            | FrameRate::Fps120Drop => 3,
            FrameRate::Fps23_976
            | FrameRate::Fps24
            | FrameRate::Fps24_98
            | FrameRate::Fps25
            | FrameRate::Fps29_97
            | FrameRate::Fps29_97Drop
            | FrameRate::Fps30
            | FrameRate::Fps30Drop
            | FrameRate::Fps47_952
            | FrameRate::Fps48
            | FrameRate::Fps50
            | FrameRate::Fps59_94
            | FrameRate::Fps59_94Drop
            | FrameRate::Fps60
            | FrameRate::Fps60Drop
            | FrameRate::Fps95_904
            | FrameRate::Fps96 => 2,
        }
    }

    /// Exact frames per second as a reduced fraction.
    ///
    /// Fractional rates are `(max_frames * 1000) / 1001`. 30-drop, 60-drop
    /// and 120-drop run at their integral rate.
    #[must_use]
    pub fn rate(self) -> Ratio<i64> {
        if self.is_fractional() {
            Ratio::new_raw(self.max_frames() * 1000, 1001)
        } else {
            Ratio::new_raw(self.max_frames(), 1)
        }
    }

    /// Duration of one frame in seconds, as a reduced fraction.
    #[must_use]
    pub fn frame_duration(self) -> Ratio<i64> {
        self.rate().recip()
    }

    /// Frame rate used when counting elapsed frames from timecode fields.
    ///
    /// Timecode counts at the integral bucket size regardless of the real-time
    /// rate; drop-frame rates correct the count separately.
    #[must_use]
    pub fn elapsed_frames_fps(self) -> i64 {
        self.max_frames()
    }

    /// Frame rate used when converting to and from wall-clock seconds.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn real_time_fps(self) -> f64 {
        let rate = self.rate();
        *rate.numer() as f64 / *rate.denom() as f64
    }

    /// Elapsed frames in one ten-minute block, after drops.
    #[must_use]
    pub fn frames_per_10_minutes(self) -> i64 {
        self.max_frames() * 600 - self.frames_dropped_per_minute() * 9
    }

    /// Total elapsed frames contained in the given upper limit.
    #[must_use]
    pub fn max_total_frames(self, limit: UpperLimit) -> i64 {
        let naive = self.max_frames() * limit.seconds();
        if self.is_drop() {
            let minutes = limit.seconds() / 60;
            naive - self.frames_dropped_per_minute() * (minutes - minutes / 10)
        } else {
            naive
        }
    }

    /// Match a floating-point frame rate against the supported rates.
    ///
    /// The comparison truncates both sides to three decimal places. 29.97,
    /// 59.94 and 119.88 (and 30, 60, 120) each match a drop and a non-drop
    /// variant; `favor_drop_frame` picks between them. Returns `None` for
    /// non-standard or variable rates.
    #[must_use]
    pub fn from_fps(fps: f64, favor_drop_frame: bool) -> Option<Self> {
        if !fps.is_finite() || fps <= 0.0 {
            return None;
        }
        let wanted = truncated_millis(fps);
        let mut candidates = Self::ALL
            .iter()
            .copied()
            .filter(|rate| truncated_millis(rate.real_time_fps()) == wanted);

        let first = candidates.next();
        let second = candidates.next();
        let found = match (first, second) {
            (Some(a), Some(b)) => {
                if a.is_drop() == favor_drop_frame {
                    Some(a)
                } else {
                    Some(b)
                }
            }
            (single, None) => single,
            (None, Some(_)) => None,
        };
        if found.is_none() {
            tracing::debug!(fps, "no supported frame rate matches");
        }
        found
    }

    /// Match an exact rational rate (frames per second) against the
    /// supported rates.
    ///
    /// The fraction need not be reduced. Drop-frame variants share a rate with
    /// their non-drop sibling, so `drop` selects between them.
    #[must_use]
    pub fn from_rate(numerator: i64, denominator: i64, drop: bool) -> Option<Self> {
        if denominator == 0 {
            return None;
        }
        let wanted = Ratio::new(numerator, denominator);
        Self::ALL
            .iter()
            .copied()
            .find(|rate| rate.rate() == wanted && rate.is_drop() == drop)
    }

    /// Match a frame duration (seconds per frame) against the supported rates.
    #[must_use]
    pub fn from_frame_duration(numerator: i64, denominator: i64, drop: bool) -> Option<Self> {
        Self::from_rate(denominator, numerator, drop)
    }

    /// Short human-readable name, e.g. `29.97d`.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            FrameRate::Fps23_976 => "23.976",
            FrameRate::Fps24 => "24",
            FrameRate::Fps24_98 => "24.98",
            FrameRate::Fps25 => "25",
            FrameRate::Fps29_97 => "29.97",
            FrameRate::Fps29_97Drop => "29.97d",
            FrameRate::Fps30 => "30",
            FrameRate::Fps30Drop => "30d",
            FrameRate::Fps47_952 => "47.952",
            FrameRate::Fps48 => "48",
            FrameRate::Fps50 => "50",
            FrameRate::Fps59_94 => "59.94",
            FrameRate::Fps59_94Drop => "59.94d",
            FrameRate::Fps60 => "60",
            FrameRate::Fps60Drop => "60d",
            FrameRate::Fps95_904 => "95.904",
            FrameRate::Fps96 => "96",
            FrameRate::Fps100 => "100",
            FrameRate::Fps119_88 => "119.88",
            FrameRate::Fps119_88Drop => "119.88d",
            FrameRate::Fps120 => "120",
            FrameRate::Fps120Drop => "120d",
        }
    }
}

impl std::fmt::Display for FrameRate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} fps", self.name())
    }
}

// `1e-6` absorbs products such as `29.97 * 1000.0` landing just below an integer.
#[allow(clippy::cast_possible_truncation)]
fn truncated_millis(fps: f64) -> i64 {
    (fps * 1000.0 + 1e-6).trunc() as i64
}
