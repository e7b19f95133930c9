//! Serializing [`Chart`] into the chart text.

use std::fmt::Write as _;

use super::Chart;
use crate::scroll::ScrollSpeed;

impl Chart {
    /// Serializes the chart into the text, which [`Chart::parse`] brings back into the same measures.
    ///
    /// `#BPMCHANGE` and `#MEASURE` are written only before the measure which changes them,
    /// and the scroll speed at the start is the normal speed `1`.
    #[must_use]
    #[allow(clippy::float_cmp)]
    pub fn serialize(&self) -> String {
        let mut text = String::new();
        let mut bpm: Option<f64> = None;
        let mut beat_value: Option<f64> = None;
        let mut scroll = ScrollSpeed::NORMAL;
        for measure in &self.measures {
            if bpm != Some(measure.bpm()) {
                let _ = writeln!(text, "#BPMCHANGE {}", measure.bpm());
                bpm = Some(measure.bpm());
            }
            if beat_value != Some(measure.beat().value()) {
                let _ = writeln!(text, "#MEASURE {}", measure.beat());
                beat_value = Some(measure.beat().value());
            }
            text.push_str(&measure.serialize(scroll));
            text.push('\n');
            if let Some(last) = measure.last_note() {
                scroll = last.scroll;
            }
        }
        text
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        math::Fraction,
        measure::Measure,
        note::{Note, NoteKind},
    };

    #[test]
    fn directives_only_on_change() {
        let chart = Chart::new(vec![
            Measure::parse("1010", 120.0, Fraction::COMMON_TIME),
            Measure::parse("2020", 120.0, Fraction::COMMON_TIME),
            Measure::parse("333", 120.0, Fraction::new(3, 4)),
            Measure::parse("4", 150.0, Fraction::new(6, 8)),
        ]);
        assert_eq!(
            chart.serialize(),
            "#BPMCHANGE 120\n#MEASURE 4/4\n1010,\n2020,\n#MEASURE 3/4\n333,\n#BPMCHANGE 150\n4,\n"
        );
    }

    #[test]
    fn scroll_carries_over_measures() {
        let slow = ScrollSpeed::new(0.5, 0.0);
        let chart = Chart::new(vec![
            Measure::new(
                vec![Note::new(NoteKind::Don), Note::with_scroll(NoteKind::Ka, slow)],
                120.0,
                Fraction::COMMON_TIME,
            ),
            Measure::new(vec![], 120.0, Fraction::COMMON_TIME),
            Measure::new(
                vec![Note::with_scroll(NoteKind::Don, slow), Note::new(NoteKind::Rest)],
                120.0,
                Fraction::COMMON_TIME,
            ),
        ]);
        assert_eq!(
            chart.serialize(),
            "#BPMCHANGE 120\n#MEASURE 4/4\n1\n#SCROLL 0.5\n2,\n0,\n1\n#SCROLL 1\n0,\n"
        );
    }

    #[test]
    fn reparse() {
        let source = "#BPMCHANGE 180\n#MEASURE 7/8\n1020\n#SCROLL 1-1i\n3040,\n,\n#SCROLL 2\n5008,\n";
        let chart = Chart::parse(source).unwrap();
        let reparsed = Chart::parse(&chart.serialize()).unwrap();
        assert_eq!(reparsed.measure_count(), chart.measure_count());
        for (lhs, rhs) in chart.measures().iter().zip(reparsed.measures()) {
            assert_eq!(lhs.bpm(), rhs.bpm());
            assert_eq!(lhs.beat(), rhs.beat());
        }
        assert_eq!(reparsed[0], chart[0]);
        assert_eq!(reparsed[2], chart[2]);
    }
}
