//! Definitions of the measure, one bar of the chart.
//!
//! Notes in a measure are spaced evenly, so the time of a note is interpolated from its index:
//!
//! ```
//! use tja_rs::prelude::*;
//!
//! let measure = Measure::parse("10201020", 120.0, Fraction::new(3, 4));
//! assert_eq!(measure.notes_count(), 8);
//! assert_eq!(measure.duration(), 1.5);
//! assert_eq!(measure.elapsed_until(4), Ok(0.75));
//! ```

use std::{
    fmt::{self, Write as _},
    iter,
    ops::{Index, IndexMut},
};

use itertools::Itertools;

use crate::{
    error::{ChartError, Result},
    math::Fraction,
    note::{Note, NoteKind},
    scroll::ScrollSpeed,
};

/// A slot of the note located by [`Measure::locate`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// How many measures away from the measure the slot is.
    pub measure_offset: usize,
    /// The note index in the measure.
    pub index: usize,
}

/// One bar of the chart, the notes with the time signature and the tempo.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Measure {
    notes: Vec<Note>,
    beat: Fraction,
    bpm: f64,
}

impl Measure {
    /// Creates a measure from the notes in performance order.
    #[must_use]
    pub const fn new(notes: Vec<Note>, bpm: f64, beat: Fraction) -> Self {
        Self { notes, beat, bpm }
    }

    /// Parses the note digits such as `10201020`. Characters other than digits are ignored.
    #[must_use]
    pub fn parse(text: &str, bpm: f64, beat: Fraction) -> Self {
        Self::new(text.chars().filter_map(Note::parse).collect(), bpm, beat)
    }

    /// Creates a measure filled with `notes_count` rests.
    #[must_use]
    pub fn create_blank(bpm: f64, beat: Fraction, notes_count: usize) -> Self {
        Self::new(vec![Note::REST; notes_count], bpm, beat)
    }

    /// The notes in performance order.
    #[must_use]
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The time signature.
    #[must_use]
    pub const fn beat(&self) -> Fraction {
        self.beat
    }

    /// Replaces the time signature.
    pub const fn set_beat(&mut self, beat: Fraction) {
        self.beat = beat;
    }

    /// The tempo in beats per minute.
    #[must_use]
    pub const fn bpm(&self) -> f64 {
        self.bpm
    }

    /// Replaces the tempo.
    pub const fn set_bpm(&mut self, bpm: f64) {
        self.bpm = bpm;
    }

    /// The number of the notes including rests.
    #[must_use]
    pub fn notes_count(&self) -> usize {
        self.notes.len()
    }

    /// Gets the note at the index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Note> {
        self.notes.get(index)
    }

    /// Gets the mutable note at the index.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut Note> {
        self.notes.get_mut(index)
    }

    /// The last note, or `None` if the measure is empty.
    #[must_use]
    pub fn last_note(&self) -> Option<&Note> {
        self.notes.last()
    }

    /// The length of the measure in seconds.
    ///
    /// The tempo must be positive, otherwise the result is not finite.
    #[must_use]
    pub fn duration(&self) -> f64 {
        (60.0 / self.bpm) * 4.0 * self.beat.value()
    }

    /// The number of the notes which are not rests.
    #[must_use]
    pub fn combo(&self) -> usize {
        self.notes.iter().filter(|note| !note.kind.is_rest()).count()
    }

    /// The elapsed time in seconds from the start of the measure to the `note_count`-th note.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::EmptyMeasure`] if the measure has no notes.
    pub fn elapsed_until(&self, note_count: usize) -> Result<f64> {
        if self.notes.is_empty() {
            return Err(ChartError::EmptyMeasure);
        }
        Ok((note_count as f64 / self.notes_count() as f64) * self.duration())
    }

    /// Iterates the notes with the elapsed time in seconds from the start of the measure.
    ///
    /// The time is the same as [`Measure::elapsed_until`] of the note index.
    pub fn notes_with_elapsed(&self) -> impl Iterator<Item = (&Note, f64)> + '_ {
        let duration = self.duration();
        let notes_count = self.notes_count() as f64;
        self.notes
            .iter()
            .enumerate()
            .map(move |(index, note)| (note, (index as f64 / notes_count) * duration))
    }

    /// Locates the note hit at `time` in the grid of this measure started at `measure_start`.
    ///
    /// When the note is beyond this measure, the overflowed time is divided by the number of
    /// the measures passed instead of wrapped, so the returned index can exceed the notes
    /// count. The index is not clamped.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidRange`] if `time` precedes `measure_start`.
    pub fn locate(&self, measure_start: f64, time: f64) -> Result<Slot> {
        if time < measure_start {
            return Err(ChartError::InvalidRange {
                start: measure_start,
                time,
            });
        }
        let duration = self.duration();
        let mut relative = time - measure_start;

        let measure_offset = (relative / duration) as usize;
        if measure_offset > 0 {
            relative /= measure_offset as f64;
        }

        let note_interval = duration / self.notes_count() as f64;
        let index = (relative / note_interval) as usize;
        Ok(Slot {
            measure_offset,
            index,
        })
    }

    /// Locates the note in the grid of a blank measure, see [`Measure::locate`].
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::InvalidRange`] if `time` precedes `measure_start`.
    pub fn locate_in_blank(
        bpm: f64,
        beat: Fraction,
        notes_count: usize,
        measure_start: f64,
        time: f64,
    ) -> Result<Slot> {
        Self::create_blank(bpm, beat, notes_count).locate(measure_start, time)
    }

    /// Inserts the padding notes after every note, and returns it as a new measure.
    #[must_use]
    pub fn padding_notes(&self, padding: &[Note]) -> Self {
        let notes = self
            .notes
            .iter()
            .flat_map(|&note| iter::once(note).chain(padding.iter().copied()))
            .collect();
        Self::new(notes, self.bpm, self.beat)
    }

    /// Inserts `size` notes of the kind after every note, and returns it as a new measure.
    #[must_use]
    pub fn padding_kind(&self, kind: NoteKind, size: usize) -> Self {
        self.padding_notes(&vec![Note::new(kind); size])
    }

    /// Inserts `size` rests after every note, and returns it as a new measure.
    #[must_use]
    pub fn padding(&self, size: usize) -> Self {
        self.padding_kind(NoteKind::Rest, size)
    }

    /// Concatenates the digits of the notes, without any scroll speed.
    #[must_use]
    pub fn to_kind_string(&self) -> String {
        self.notes.iter().join("")
    }

    /// Serializes the measure into the chart text terminated by `,`.
    ///
    /// `#SCROLL` lines are inserted where the scroll speed differs from the preceding note,
    /// and `previous_scroll` is the speed in effect before this measure.
    #[must_use]
    pub fn serialize(&self, previous_scroll: ScrollSpeed) -> String {
        let mut text = String::new();
        let mut previous = previous_scroll;
        for note in &self.notes {
            if note.scroll != previous {
                if !text.is_empty() {
                    text.push('\n');
                }
                let _ = writeln!(text, "#SCROLL {}", note.scroll);
                previous = note.scroll;
            }
            text.push(note.kind.as_char());
        }
        if self.notes.is_empty() {
            text.push(NoteKind::Rest.as_char());
        }
        text.push(',');
        text
    }
}

impl Index<usize> for Measure {
    type Output = Note;

    #[allow(clippy::indexing_slicing)]
    fn index(&self, index: usize) -> &Self::Output {
        &self.notes[index]
    }
}

impl IndexMut<usize> for Measure {
    #[allow(clippy::indexing_slicing)]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.notes[index]
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.serialize(ScrollSpeed::NORMAL))
    }
}
