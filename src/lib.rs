//! The TJA chart model, its text format and the merger of charts.
//!
//! A chart is a sequence of [`measure::Measure`]s, and a measure is a sequence of evenly
//! spaced [`note::Note`]s with the time signature and the tempo. Each note carries its own
//! [`scroll::ScrollSpeed`], a complex number which scales and rotates the note motion.
//!
//! - [`chart`] parses the chart text into [`chart::Chart`] and serializes it back.
//! - [`merge`] overlays several charts onto one grid by the nearest time slot.
//!
//! ```
//! use tja_rs::prelude::*;
//!
//! let chart = Chart::parse("#BPMCHANGE 150\n1020,\n#SCROLL 2\n3,\n").unwrap();
//! assert_eq!(chart.measure_count(), 2);
//! assert_eq!(chart.combo(), 3);
//! assert_eq!(chart[1][0].scroll, ScrollSpeed::new(2.0, 0.0));
//!
//! let fills = Chart::parse("0303,").unwrap();
//! let merged = near_merge(
//!     150.0,
//!     Fraction::COMMON_TIME,
//!     8,
//!     &[(&Chart::parse("1020,").unwrap(), ScrollSpeed::NORMAL), (&fills, ScrollSpeed::NORMAL)],
//! )
//! .unwrap();
//! assert_eq!(merged[0].to_kind_string(), "10302030");
//! ```
//!
//! # Features
//!
//! - `serde`: derives `Serialize` and `Deserialize` on the model types.

#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod chart;
pub mod config;
pub mod error;
pub mod math;
pub mod measure;
pub mod merge;
pub mod note;
pub mod prelude;
pub mod scroll;
pub mod text;

pub use self::error::{ChartError, Result};
