//! Configuration of chart parsing.

use crate::{math::Fraction, scroll::ScrollSpeed};

/// The state in effect before any directive of the chart text.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ParseConfig {
    /// The tempo until the first `#BPMCHANGE`.
    pub bpm: f64,
    /// The time signature until the first `#MEASURE`.
    pub beat: Fraction,
    /// The scroll speed until the first `#SCROLL`.
    pub scroll: ScrollSpeed,
}

impl ParseConfig {
    /// Sets the initial tempo.
    #[must_use]
    pub const fn with_bpm(mut self, bpm: f64) -> Self {
        self.bpm = bpm;
        self
    }

    /// Sets the initial time signature.
    #[must_use]
    pub const fn with_beat(mut self, beat: Fraction) -> Self {
        self.beat = beat;
        self
    }

    /// Sets the initial scroll speed.
    #[must_use]
    pub const fn with_scroll(mut self, scroll: ScrollSpeed) -> Self {
        self.scroll = scroll;
        self
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self {
            bpm: 120.0,
            beat: Fraction::COMMON_TIME,
            scroll: ScrollSpeed::NORMAL,
        }
    }
}
