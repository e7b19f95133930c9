//! Merging several charts into one grid by the nearest time slot.
//!
//! Every note other than rests is placed into the slot of a newly allocated blank chart whose
//! time is the nearest below the note's own time. The charts are placed in order, and a note
//! landing on a used slot overwrites it.
//!
//! ```
//! use tja_rs::prelude::*;
//!
//! let don = Chart::parse("1000,").unwrap();
//! let ka = Chart::parse("0020,").unwrap();
//! let merged = near_merge(
//!     120.0,
//!     Fraction::COMMON_TIME,
//!     8,
//!     &[(&don, ScrollSpeed::NORMAL), (&ka, ScrollSpeed::new(2.0, 0.0))],
//! )
//! .unwrap();
//! assert_eq!(merged[0].to_kind_string(), "10002000");
//! assert_eq!(merged[0][4].scroll, ScrollSpeed::new(2.0, 0.0));
//! ```

use num::ToPrimitive as _;

use crate::{
    chart::Chart,
    error::{ChartError, Result},
    math::Fraction,
    measure::{Measure, Slot},
    note::Note,
    scroll::ScrollSpeed,
};

/// A chart to merge, with the speed multiplied into the scroll speed of its notes.
pub type MergeSource<'a> = (&'a Chart, ScrollSpeed);

/// Merges the charts into a chart of `notes_per_measure` slots per measure at the tempo and the time signature.
///
/// Each source is the chart and the speed multiplied into the scroll speed of its notes.
/// The merged chart has as many measures as needed to cover the longest source.
///
/// # Errors
///
/// - [`ChartError::EmptyInput`] if `sources` is empty.
/// - [`ChartError::InvalidMeasureCount`] if the measures to cover the longest source cannot be
///   counted, such as for the zero time signature or an infinite source.
/// - [`ChartError::SlotOutOfRange`] if a note is located outside of the merged chart. Notes
///   beyond the first measure are located by [`Measure::locate`], whose overflowed index
///   exceeds the measure.
/// - [`ChartError::InvalidRange`] from the timing of the notes.
pub fn near_merge(
    bpm: f64,
    beat: Fraction,
    notes_per_measure: usize,
    sources: &[MergeSource<'_>],
) -> Result<Chart> {
    let max_duration = sources
        .iter()
        .map(|(chart, _)| chart.duration())
        .reduce(f64::max)
        .ok_or(ChartError::EmptyInput)?;

    let measures = (max_duration * bpm / (240.0 * beat.value())).round();
    let measure_count = measures
        .to_usize()
        .ok_or(ChartError::InvalidMeasureCount { measures })?;
    log::debug!(
        "merging {} charts into {measure_count} measures of {notes_per_measure} notes",
        sources.len()
    );
    let grid = Measure::create_blank(bpm, beat, notes_per_measure);
    let mut merged: Chart = std::iter::repeat_n(grid.clone(), measure_count).collect();

    for &(chart, speed) in sources {
        for (measure_index, measure) in chart.measures().iter().enumerate() {
            let measure_start = chart.elapsed_until(measure_index);
            for (note, elapsed) in measure.notes_with_elapsed() {
                if note.kind.is_rest() {
                    continue;
                }
                let slot = grid.locate(0.0, measure_start + elapsed)?;
                place(&mut merged, slot, Note::with_scroll(note.kind, note.scroll * speed))?;
            }
        }
    }
    Ok(merged)
}

fn place(merged: &mut Chart, slot: Slot, note: Note) -> Result<()> {
    let Slot {
        measure_offset,
        index,
    } = slot;
    *merged
        .note_mut(measure_offset, index)
        .ok_or(ChartError::SlotOutOfRange {
            measure: measure_offset,
            index,
        })? = note;
    Ok(())
}
