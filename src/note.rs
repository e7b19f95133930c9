//! Definitions of the note, one symbol of the chart.

use std::fmt;

use crate::scroll::ScrollSpeed;

/// A kind of the note. Each kind is written as one digit in the chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum NoteKind {
    /// A rest, no note is there. `0`
    #[default]
    Rest,
    /// A small centre hit, "don". `1`
    Don,
    /// A small rim hit, "ka". `2`
    Ka,
    /// A large centre hit. `3`
    LargeDon,
    /// A large rim hit. `4`
    LargeKa,
    /// The start of a drum roll. `5`
    Roll,
    /// The start of a large drum roll. `6`
    LargeRoll,
    /// The start of a balloon. `7`
    Balloon,
    /// The end of a drum roll or a balloon. `8`
    RollEnd,
    /// The start of a dense roll, the "kusudama". `9`
    DenseRoll,
}

impl NoteKind {
    const ALL: [Self; 10] = [
        Self::Rest,
        Self::Don,
        Self::Ka,
        Self::LargeDon,
        Self::LargeKa,
        Self::Roll,
        Self::LargeRoll,
        Self::Balloon,
        Self::RollEnd,
        Self::DenseRoll,
    ];

    /// Converts the code number `0..=9` into the kind.
    #[must_use]
    pub fn from_code(code: u8) -> Option<Self> {
        Self::ALL.get(usize::from(code)).copied()
    }

    /// The code number of the kind, `0..=9`.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Converts the digit character into the kind. Other characters are not notes.
    #[must_use]
    pub fn from_char(c: char) -> Option<Self> {
        c.to_digit(10)
            .and_then(|digit| Self::from_code(digit as u8))
    }

    /// The digit character of the kind.
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.code()) as char
    }

    /// Whether the kind is [`NoteKind::Rest`].
    #[must_use]
    pub const fn is_rest(self) -> bool {
        matches!(self, Self::Rest)
    }

    /// Whether the kind is one of the four drum hits.
    #[must_use]
    pub const fn is_hit(self) -> bool {
        matches!(self, Self::Don | Self::Ka | Self::LargeDon | Self::LargeKa)
    }
}

impl fmt::Display for NoteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A note in the measure. Rests are notes too, they occupy one slot of the measure.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// The kind of the note.
    pub kind: NoteKind,
    /// The scroll speed of the note.
    pub scroll: ScrollSpeed,
}

impl Note {
    /// A rest with the normal scroll speed.
    pub const REST: Self = Self::new(NoteKind::Rest);

    /// Creates a note with the normal scroll speed.
    #[must_use]
    pub const fn new(kind: NoteKind) -> Self {
        Self::with_scroll(kind, ScrollSpeed::NORMAL)
    }

    /// Creates a note with the scroll speed.
    #[must_use]
    pub const fn with_scroll(kind: NoteKind, scroll: ScrollSpeed) -> Self {
        Self { kind, scroll }
    }

    /// Parses the character as a note with the normal scroll speed, or returns `None` if it is not a digit.
    #[must_use]
    pub fn parse(c: char) -> Option<Self> {
        NoteKind::from_char(c).map(Self::new)
    }

    /// Changes the kind of the note.
    pub const fn change_kind(&mut self, kind: NoteKind) {
        self.kind = kind;
    }

    /// Changes the scroll speed of the note.
    pub const fn change_scroll(&mut self, scroll: ScrollSpeed) {
        self.scroll = scroll;
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.kind, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_digits() {
        let cases = [
            ('0', NoteKind::Rest),
            ('1', NoteKind::Don),
            ('2', NoteKind::Ka),
            ('3', NoteKind::LargeDon),
            ('4', NoteKind::LargeKa),
            ('5', NoteKind::Roll),
            ('6', NoteKind::LargeRoll),
            ('7', NoteKind::Balloon),
            ('8', NoteKind::RollEnd),
            ('9', NoteKind::DenseRoll),
        ];
        for (c, kind) in cases {
            let note = Note::parse(c).unwrap_or_else(|| panic!("'{c}' must be a note"));
            assert_eq!(note.kind, kind);
            assert_eq!(note.scroll, ScrollSpeed::NORMAL);
            assert_eq!(note.to_string(), c.to_string());
        }
    }

    #[test]
    fn parse_non_digits() {
        for c in ['\0', ' ', 'A', '#', ',', '٣'] {
            assert_eq!(Note::parse(c), None, "{c:?} must not be a note");
        }
    }

    #[test]
    fn codes() {
        assert_eq!(NoteKind::Roll.code(), 5);
        assert_eq!(NoteKind::from_code(9), Some(NoteKind::DenseRoll));
        assert_eq!(NoteKind::from_code(10), None);
        assert!(NoteKind::Rest.is_rest());
        assert!(NoteKind::LargeKa.is_hit());
        assert!(!NoteKind::Balloon.is_hit());
    }

    #[test]
    fn change_in_place() {
        let mut note = Note::REST;
        note.change_kind(NoteKind::Ka);
        note.change_scroll(ScrollSpeed::new(0.0, 2.0));
        assert_eq!(
            note,
            Note::with_scroll(NoteKind::Ka, ScrollSpeed::new(0.0, 2.0))
        );
    }
}
