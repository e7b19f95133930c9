//! Prelude module for the crate.
//!
//! You can use `use tja_rs::prelude::*;` to import all chart types at once.

pub use crate::{
    chart::Chart,
    config::ParseConfig,
    error::ChartError,
    math::{Fraction, gcd, lcm},
    measure::{Measure, Slot},
    merge::{MergeSource, near_merge},
    note::{Note, NoteKind},
    scroll::ScrollSpeed,
};
