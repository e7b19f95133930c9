//! Definitions of the chart, the whole notation of a song.
//!
//! The chart text is line oriented. Directive lines change the state applied to the following
//! measures, and the other lines are note digits where `,` closes a measure:
//!
//! ```text
//! #BPMCHANGE 150
//! #MEASURE 3/4
//! 102010,
//! #SCROLL 1.5+0.5i
//! 3,
//! ```
//!
//! Text == [`Chart::parse`] ==> [`Chart`] == [`Chart::serialize`] ==> Text

mod parse;
mod unparse;

use std::{
    fmt,
    ops::{Index, IndexMut},
    str::FromStr,
};

use crate::{
    error::{ChartError, Result},
    math::Fraction,
    measure::Measure,
    note::Note,
};

/// A chart, the measures in performance order.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chart {
    measures: Vec<Measure>,
}

impl Chart {
    /// Creates a chart from the measures.
    #[must_use]
    pub const fn new(measures: Vec<Measure>) -> Self {
        Self { measures }
    }

    /// The measures in performance order.
    #[must_use]
    pub fn measures(&self) -> &[Measure] {
        &self.measures
    }

    /// The number of the measures.
    #[must_use]
    pub fn measure_count(&self) -> usize {
        self.measures.len()
    }

    /// Gets the measure at the index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Measure> {
        self.measures.get(index)
    }

    /// Gets the mutable measure at the index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Measure> {
        self.measures.get_mut(index)
    }

    /// Gets the mutable note at the index of the measure at the index.
    pub fn note_mut(&mut self, measure: usize, index: usize) -> Option<&mut Note> {
        self.measures.get_mut(measure)?.get_mut(index)
    }

    /// The first measure, or `None` if the chart is empty.
    #[must_use]
    pub fn first_measure(&self) -> Option<&Measure> {
        self.measures.first()
    }

    /// The last measure, or `None` if the chart is empty.
    #[must_use]
    pub fn last_measure(&self) -> Option<&Measure> {
        self.measures.last()
    }

    /// The number of the notes which are not rests.
    #[must_use]
    pub fn combo(&self) -> usize {
        self.measures.iter().map(Measure::combo).sum()
    }

    /// The length of the chart in seconds.
    #[must_use]
    pub fn duration(&self) -> f64 {
        self.measures.iter().map(Measure::duration).sum()
    }

    /// The elapsed time in seconds until the measure at the index starts.
    #[must_use]
    pub fn elapsed_until(&self, measure_index: usize) -> f64 {
        self.measures
            .iter()
            .take(measure_index)
            .map(Measure::duration)
            .sum()
    }

    /// Appends the measure.
    pub fn add_measure(&mut self, measure: Measure) {
        self.measures.push(measure);
    }

    /// Appends the measure made from the last measure, which is `None` if the chart is empty.
    pub fn add_measure_with(&mut self, make: impl FnOnce(Option<&Measure>) -> Measure) {
        let measure = make(self.last_measure());
        self.add_measure(measure);
    }

    /// Appends a measure of `notes_count` rests.
    ///
    /// The tempo and the time signature follow the last measure, or the defaults if the chart is empty.
    pub fn add_blank_measure(&mut self, notes_count: usize, default_bpm: f64, default_beat: Fraction) {
        self.add_measure_with(|last| {
            let (bpm, beat) = last.map_or((default_bpm, default_beat), |last| {
                (last.bpm(), last.beat())
            });
            Measure::create_blank(bpm, beat, notes_count)
        });
    }
}

impl Index<usize> for Chart {
    type Output = Measure;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.measures[index]
    }
}

impl IndexMut<usize> for Chart {
    #[allow(clippy::indexing_slicing)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.measures[index]
    }
}

impl fmt::Display for Chart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize())
    }
}

impl FromStr for Chart {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl FromIterator<Measure> for Chart {
    fn from_iter<T: IntoIterator<Item = Measure>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
