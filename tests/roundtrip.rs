use proptest::prelude::*;
use tja_rs::prelude::*;

fn note() -> impl Strategy<Value = Note> {
    let kind = (0u8..10).prop_map(|code| NoteKind::from_code(code).unwrap_or_default());
    let scroll = prop_oneof![
        3 => Just(ScrollSpeed::NORMAL),
        1 => Just(ScrollSpeed::new(2.0, 0.0)),
        1 => Just(ScrollSpeed::new(0.0, -1.0)),
        1 => Just(ScrollSpeed::new(-0.5, 1.25)),
    ];
    (kind, scroll).prop_map(|(kind, scroll)| Note::with_scroll(kind, scroll))
}

fn measure() -> impl Strategy<Value = Measure> {
    let bpm = prop_oneof![Just(120.0), Just(150.0), Just(87.5)];
    let beat = prop_oneof![
        Just(Fraction::new(4, 4)),
        Just(Fraction::new(3, 4)),
        Just(Fraction::new(6, 8)),
        Just(Fraction::new(7, 8)),
    ];
    (prop::collection::vec(note(), 1..24), bpm, beat)
        .prop_map(|(notes, bpm, beat)| Measure::new(notes, bpm, beat))
}

fn chart() -> impl Strategy<Value = Chart> {
    prop::collection::vec(measure(), 0..12).prop_map(Chart::new)
}

proptest! {
    #[test]
    fn serialize_then_parse_keeps_measures(chart in chart()) {
        let reparsed = Chart::parse(&chart.serialize()).unwrap();
        prop_assert_eq!(reparsed.measure_count(), chart.measure_count());
        for (lhs, rhs) in chart.measures().iter().zip(reparsed.measures()) {
            prop_assert_eq!(lhs.notes(), rhs.notes());
            prop_assert_eq!(lhs.bpm().to_bits(), rhs.bpm().to_bits());
            prop_assert_eq!(lhs.beat().value().to_bits(), rhs.beat().value().to_bits());
        }
    }

    #[test]
    fn parse_is_idempotent(chart in chart()) {
        let once = Chart::parse(&chart.serialize()).unwrap();
        let twice = Chart::parse(&once.serialize()).unwrap();
        prop_assert_eq!(twice, once);
    }

    #[test]
    fn scroll_speed_text_round_trip(real in -64i32..64, imaginary in -64i32..64) {
        let speed = ScrollSpeed::new(f64::from(real) / 4.0, f64::from(imaginary) / 8.0);
        prop_assert_eq!(speed.to_string().parse::<ScrollSpeed>(), Ok(speed));
    }
}
