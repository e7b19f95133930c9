//! Parsing [`Chart`] from the chart text.

use std::sync::LazyLock;

use regex::Regex;

use super::Chart;
use crate::{
    config::ParseConfig,
    error::{ChartError, Result},
    math::Fraction,
    measure::Measure,
    note::Note,
    scroll::ScrollSpeed,
    text::{named, pull_out},
};

static DIRECTIVE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^#(?P<keyword>[A-Z]+)(?:\s+(?P<payload>.*?))?\s*$")
        .expect("the directive pattern is valid")
});

static FRACTION_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<numerator>\d+)\s*/\s*(?P<denominator>\d+)$")
        .expect("the fraction pattern is valid")
});

/// A directive line recognized by the parser.
#[derive(Debug, Clone, Copy, PartialEq)]
enum Directive {
    /// `#BPMCHANGE 150`
    BpmChange(f64),
    /// `#MEASURE 3/4`
    Measure(Fraction),
    /// `#SCROLL 1.5+1i`
    Scroll(ScrollSpeed),
}

impl Directive {
    /// Parses the directive line. Returns `Ok(None)` if the line is not a recognized directive.
    fn parse(line: &str) -> Result<Option<Self>> {
        let Some((keyword, payload)) = pull_out(line, &DIRECTIVE_PATTERN, |caps| {
            (named(caps, "keyword"), named(caps, "payload"))
        }) else {
            return Ok(None);
        };
        let Some(keyword) = keyword else {
            return Ok(None);
        };
        if !matches!(keyword, "BPMCHANGE" | "MEASURE" | "SCROLL") {
            return Ok(None);
        }
        let payload =
            payload.ok_or_else(|| ChartError::format(format!("#{keyword} needs a value")))?;
        let directive = match keyword {
            "BPMCHANGE" => Self::BpmChange(payload.parse().map_err(|_| {
                ChartError::format(format!("`{payload}` is not a tempo"))
            })?),
            "MEASURE" => Self::Measure(parse_fraction(payload)?),
            _ => Self::Scroll(ScrollSpeed::parse(payload)?),
        };
        Ok(Some(directive))
    }
}

fn parse_fraction(text: &str) -> Result<Fraction> {
    let not_fraction = || ChartError::format(format!("`{text}` is not a time signature"));
    let (numerator, denominator) = pull_out(text, &FRACTION_PATTERN, |caps| {
        let component = |name: &str| named(caps, name).and_then(|s| s.parse::<i64>().ok());
        component("numerator").zip(component("denominator"))
    })
    .flatten()
    .ok_or_else(not_fraction)?;
    if denominator == 0 {
        return Err(not_fraction());
    }
    Ok(Fraction::new(numerator, denominator))
}

/// The state while scanning the chart text.
struct ParseState {
    bpm: f64,
    beat: Fraction,
    scroll: ScrollSpeed,
    notes: Vec<Note>,
    measures: Vec<Measure>,
}

impl ParseState {
    fn new(config: &ParseConfig) -> Self {
        Self {
            bpm: config.bpm,
            beat: config.beat,
            scroll: config.scroll,
            notes: vec![],
            measures: vec![],
        }
    }

    fn apply(&mut self, directive: Directive) {
        log::trace!("directive: {directive:?}");
        match directive {
            Directive::BpmChange(bpm) => self.bpm = bpm,
            Directive::Measure(beat) => self.beat = beat,
            Directive::Scroll(scroll) => self.scroll = scroll,
        }
    }

    fn scan(&mut self, line: &str) {
        for c in line.chars() {
            if c == ',' {
                let notes = std::mem::take(&mut self.notes);
                self.measures.push(Measure::new(notes, self.bpm, self.beat));
            } else if let Some(note) = Note::parse(c) {
                self.notes.push(Note::with_scroll(note.kind, self.scroll));
            }
        }
    }

    fn finish(self) -> Chart {
        if !self.notes.is_empty() {
            log::debug!(
                "{} notes after the last `,` are discarded",
                self.notes.len()
            );
        }
        Chart::new(self.measures)
    }
}

impl Chart {
    /// Parses the chart text with the default [`ParseConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Format`] if a `#BPMCHANGE`, `#MEASURE` or `#SCROLL` line has an invalid value.
    pub fn parse(source: &str) -> Result<Self> {
        Self::parse_with_config(source, &ParseConfig::default())
    }

    /// Parses the chart text starting from the state in `config`.
    ///
    /// Lines starting with `#` other than `#BPMCHANGE`, `#MEASURE` and `#SCROLL` are skipped.
    /// In the other lines, digits are notes and `,` closes the measure, and any other character
    /// is ignored. Notes not closed by `,` at the end are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Format`] if a `#BPMCHANGE`, `#MEASURE` or `#SCROLL` line has an invalid value.
    pub fn parse_with_config(source: &str, config: &ParseConfig) -> Result<Self> {
        let source = source.replace('\r', "");
        let mut state = ParseState::new(config);
        for (line_index, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.starts_with('#') {
                match Directive::parse(line).map_err(|e| e.at_line(line_index + 1))? {
                    Some(directive) => state.apply(directive),
                    None => log::debug!("skipped line {}: {line}", line_index + 1),
                }
                continue;
            }
            state.scan(line);
        }
        Ok(state.finish())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::note::NoteKind;

    #[test]
    fn directives() {
        assert_eq!(
            Directive::parse("#BPMCHANGE 150.5"),
            Ok(Some(Directive::BpmChange(150.5)))
        );
        assert_eq!(
            Directive::parse("#MEASURE 3/4"),
            Ok(Some(Directive::Measure(Fraction::new(3, 4))))
        );
        assert_eq!(
            Directive::parse("#SCROLL -1+2i"),
            Ok(Some(Directive::Scroll(ScrollSpeed::new(-1.0, 2.0))))
        );
        assert_eq!(Directive::parse("#START"), Ok(None));
        assert_eq!(Directive::parse("#GOGOSTART"), Ok(None));
        assert_eq!(Directive::parse("#DELAY 1.5"), Ok(None));
        assert_eq!(Directive::parse("#BPMCHANGEX 1"), Ok(None));
    }

    #[test]
    fn invalid_directives() {
        for line in [
            "#BPMCHANGE fast",
            "#BPMCHANGE",
            "#MEASURE 4",
            "#MEASURE 4/0",
            "#MEASURE -3/4",
            "#SCROLL x",
        ] {
            assert!(
                matches!(Directive::parse(line), Err(ChartError::Format { .. })),
                "{line:?} must be rejected"
            );
        }
    }

    #[test]
    fn parse_chart() {
        const SRC: &str = "1010,\r\n#BPMCHANGE 240\n#MEASURE 3/4\n#SCROLL 2\n1 2\n0,\n,\n";
        let chart = Chart::parse(SRC).unwrap();

        assert_eq!(chart.measure_count(), 3);
        assert_eq!(chart[0].bpm(), 120.0);
        assert_eq!(chart[0].beat(), Fraction::COMMON_TIME);
        assert_eq!(chart[0].to_kind_string(), "1010");
        assert!(chart[0].notes().iter().all(|n| n.scroll == ScrollSpeed::NORMAL));

        assert_eq!(chart[1].bpm(), 240.0);
        assert_eq!(chart[1].beat(), Fraction::new(3, 4));
        assert_eq!(chart[1].to_kind_string(), "120");
        assert!(chart[1].notes().iter().all(|n| n.scroll == ScrollSpeed::new(2.0, 0.0)));

        assert_eq!(chart[2].notes_count(), 0);
    }

    #[test]
    fn scroll_changes_mid_measure() {
        let chart = Chart::parse("10\n#SCROLL 0.5i\n20,").unwrap();
        let notes = chart[0].notes();
        assert_eq!(
            notes,
            &[
                Note::new(NoteKind::Don),
                Note::new(NoteKind::Rest),
                Note::with_scroll(NoteKind::Ka, ScrollSpeed::new(0.0, 0.5)),
                Note::with_scroll(NoteKind::Rest, ScrollSpeed::new(0.0, 0.5)),
            ]
        );
    }

    #[test]
    fn scroll_with_trailing_text() {
        let chart = Chart::parse("#SCROLL 1.5 // fast\n1,\n#SCROLL 2i!\n2,").unwrap();
        assert_eq!(chart[0][0].scroll, ScrollSpeed::new(1.5, 0.0));
        assert_eq!(chart[1][0].scroll, ScrollSpeed::new(0.0, 2.0));
    }

    #[test]
    fn unclosed_notes_are_discarded() {
        let chart = Chart::parse("11,\n22").unwrap();
        assert_eq!(chart.measure_count(), 1);
    }

    #[test]
    fn error_has_line_number() {
        assert_eq!(
            Chart::parse("1,\n\n#BPMCHANGE ?\n1,"),
            Err(ChartError::Format {
                line: 3,
                message: "`?` is not a tempo".into()
            })
        );
    }

    #[test]
    fn config_sets_initial_state() {
        let config = ParseConfig::default()
            .with_bpm(200.0)
            .with_beat(Fraction::new(7, 8))
            .with_scroll(ScrollSpeed::new(1.5, 0.0));
        let chart = Chart::parse_with_config("1,", &config).unwrap();
        assert_eq!(chart[0].bpm(), 200.0);
        assert_eq!(chart[0].beat(), Fraction::new(7, 8));
        assert_eq!(chart[0][0].scroll, ScrollSpeed::new(1.5, 0.0));
    }
}
