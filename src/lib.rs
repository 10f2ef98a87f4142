//! # a3s-cron-expand
//!
//! Expands 5-field cron expressions into the explicit values each field matches.
//!
//! ## Overview
//!
//! `a3s-cron-expand` parses a schedule line (five cron fields followed by a
//! command) and expands every field's compact syntax (`*`, `a`, `a-b`,
//! `a,b,c`, `*/s`, `a-b/s`, `a/s`) into a sorted, deduplicated set of
//! integers within the field's bounds. Malformed or out-of-range input is
//! rejected with a typed error that names the field.
//!
//! It does not compute run times; it only answers "which values does this
//! field denote".
//!
//! ## Quick Start
//!
//! ```rust
//! use a3s_cron_expand::{expand, parse_schedule, FieldError};
//!
//! let schedule = parse_schedule("*/15 0 1,15 * 1-5 /usr/bin/find").unwrap();
//! assert_eq!(schedule.day_of_week().iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
//! print!("{}", schedule);
//!
//! // Fields can be expanded on their own
//! let err = expand("10-5", 0, 59, "minute").unwrap_err();
//! assert!(matches!(err, FieldError::RangeOrder { start: 10, end: 5, .. }));
//! ```
//!
//! ## Architecture
//!
//! - **field** — `FieldSpec` bounds and the `expand` grammar
//! - **schedule** — splits a schedule line and expands all five fields
//! - **render** — table and JSON output
//! - **error** — `FieldError`, `ScheduleError`, `CliError`

pub mod error;
pub mod field;
pub mod render;
pub mod schedule;

// Re-export core types
pub use error::{CliError, FieldError, Result, ScheduleError};
pub use field::{expand, FieldSpec};
pub use render::OutputFormat;
pub use schedule::{parse_schedule, Schedule};
