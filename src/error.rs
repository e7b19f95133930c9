//! Definitions of errors raised while building, parsing and merging charts.

use thiserror::Error;

/// An error occurred on the chart model, its text format or the merger.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    /// A directive payload or a scroll speed text could not be parsed.
    #[error("format error at line {line}: {message}")]
    Format {
        /// The line number where the text is, starts with 1. `0` means the text was not a part of the chart.
        line: usize,
        /// What was wrong with the text.
        message: String,
    },
    /// The hit time of the note precedes the start time of the measure.
    #[error("note time {time} precedes measure start {start}")]
    InvalidRange {
        /// The start time of the measure in seconds.
        start: f64,
        /// The hit time of the note in seconds.
        time: f64,
    },
    /// An elapsed time was requested against a measure having no notes.
    #[error("measure has no notes to interpolate the elapsed time")]
    EmptyMeasure,
    /// A fraction having the zero denominator was reduced.
    #[error("cannot reduce {numerator}/0")]
    DivideByZero {
        /// The numerator of the fraction.
        numerator: i64,
    },
    /// The merger was called without any source chart.
    #[error("no chart to merge")]
    EmptyInput,
    /// The number of the measures of the merged chart is not a count, such as for the zero time signature.
    #[error("cannot allocate {measures} measures to merge into")]
    InvalidMeasureCount {
        /// The computed number of the measures.
        measures: f64,
    },
    /// A note was located outside of the allocated grid of the merged chart.
    #[error("slot (measure {measure}, index {index}) is out of the merged grid")]
    SlotOutOfRange {
        /// The measure index of the slot.
        measure: usize,
        /// The note index of the slot in the measure.
        index: usize,
    },
}

impl ChartError {
    /// Makes a [`ChartError::Format`] not bound to any line.
    pub(crate) fn format(message: impl Into<String>) -> Self {
        Self::Format {
            line: 0,
            message: message.into(),
        }
    }

    /// Attaches the line number to [`ChartError::Format`], other variants are returned as is.
    #[must_use]
    pub(crate) fn at_line(self, line: usize) -> Self {
        match self {
            Self::Format { message, .. } => Self::Format { line, message },
            other => other,
        }
    }
}

/// Type alias of `core::result::Result<T, ChartError>`
pub type Result<T> = core::result::Result<T, ChartError>;
