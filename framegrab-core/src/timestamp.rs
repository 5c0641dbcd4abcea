//! Frame-index to seek-timestamp conversion.
//!
//! ffprobe reports frame rates as rationals (`30000/1001`). The frame index is
//! divided by that rate and the resulting offset is rendered as
//! `HH:MM:SS.ss`, the form passed to ffmpeg's `-ss`.

use std::fmt;

use crate::error::{CoreError, CoreResult};

/// A stream frame rate as reported by ffprobe's `r_frame_rate`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRate {
    numerator: f64,
    denominator: f64,
}

impl FrameRate {
    /// Parses `num/den` text. A bare number is taken as `num/1`.
    ///
    /// A zero denominator (ffprobe prints `0/0` for streams without a
    /// known rate) or a non-positive result is rejected.
    pub fn parse(text: &str) -> CoreResult<Self> {
        let text = text.trim();
        let (num, den) = match text.split_once('/') {
            Some((num, den)) => (num.trim(), den.trim()),
            None => (text, "1"),
        };

        let numerator: f64 = num
            .parse()
            .map_err(|_| CoreError::FrameRateParse(format!("bad numerator in '{text}'")))?;
        let denominator: f64 = den
            .parse()
            .map_err(|_| CoreError::FrameRateParse(format!("bad denominator in '{text}'")))?;

        if denominator == 0.0 {
            return Err(CoreError::FrameRateParse(format!(
                "zero denominator in '{text}'"
            )));
        }
        let rate = Self {
            numerator,
            denominator,
        };
        if !(rate.as_f64() > 0.0 && rate.as_f64().is_finite()) {
            return Err(CoreError::FrameRateParse(format!(
                "frame rate must be positive, got '{text}'"
            )));
        }
        Ok(rate)
    }

    /// Frames per second.
    pub fn as_f64(&self) -> f64 {
        self.numerator / self.denominator
    }
}

impl fmt::Display for FrameRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator)
    }
}

/// Position of a frame, split into hours, minutes and fractional seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeekTimestamp {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: f64,
}

impl SeekTimestamp {
    /// Splits an offset in seconds. Hours are unbounded.
    pub fn from_seconds(time: f64) -> Self {
        let time = time.max(0.0);
        let hours = (time / 3600.0).floor();
        let rem = time % 3600.0;
        let minutes = (rem / 60.0).floor();
        let seconds = rem % 60.0;
        Self {
            hours: hours as u64,
            minutes: minutes as u64,
            seconds,
        }
    }

    /// Timestamp of `frame_index` at `rate`. Frame 0 maps to zero.
    pub fn from_frame(frame_index: u64, rate: &FrameRate) -> Self {
        Self::from_seconds(frame_index as f64 / rate.as_f64())
    }

    pub fn total_seconds(&self) -> f64 {
        self.hours as f64 * 3600.0 + self.minutes as f64 * 60.0 + self.seconds
    }
}

impl fmt::Display for SeekTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:05.2}",
            self.hours, self.minutes, self.seconds
        )
    }
}
