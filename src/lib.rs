//! # liftchart - Gym Training Log Chart Data
//!
//! `liftchart` turns a semicolon-delimited gym-equipment training log
//! into the multi-series data set a time chart renders: one series per
//! machine (weight setting over time, with optional session duration)
//! plus a synthetic "Average" series, each tagged with a deterministic
//! display color derived from the machine's equipment group.
//!
//! ## Pipeline
//!
//! Raw rows flow through the stages in order:
//!
//! 1. [`table`]: tokenize the semicolon-delimited export into a header
//!    row plus data rows ([`table::RawTable`]).
//! 2. [`header`]: classify the header into the date column and machine
//!    columns, pairing or filtering duration columns depending on the
//!    detected header convention.
//! 3. [`series`]: build one series per machine, normalizing every cell
//!    through [`normalize`] and silently skipping sparse data.
//! 4. [`average`]: derive the cross-machine daily average series.
//! 5. [`color`]: assign each machine a color from its group's base
//!    palette, purely as a function of the key set.
//! 6. [`order`]: arrange the final array (average first, machines in
//!    source or grouped order).
//!
//! [`session::ChartSession`] runs the whole pipeline once per loaded
//! file and caches the result; [`tooltip`] derives the per-date tooltip
//! rows the renderer formats.
//!
//! ## Quick Start
//!
//! ```rust
//! use liftchart::session::ChartSession;
//!
//! let log = "Datum;A1;;B1;\n01.01.2024;100;130;50;\n02.01.2024;105;;55;\n";
//! let session = ChartSession::from_reader(log.as_bytes())?;
//!
//! // Average first, machines grouped by equipment letter.
//! for series in session.ordered_series(true) {
//!     println!("{} ({}): {} points", series.key, series.color, series.points.len());
//! }
//! # Ok::<(), liftchart::table::TableError>(())
//! ```
//!
//! ## Input Format
//!
//! Semicolon-delimited text, header row first. Column 0 is always the
//! date column (`dd.mm.yyyy`), whatever its label. Machine columns carry
//! a short code whose first letter names the equipment group; a paired
//! duration column either follows with a blank header (sparse
//! convention) or is named with a duration marker such as `sec` (fully
//! labeled convention). Missing sessions are expected and skipped
//! silently; only a structurally broken or empty file is an error.

// Documentation lints - enforce complete documentation for publication
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]

pub mod average;
pub mod color;
pub mod header;
pub mod normalize;
pub mod order;
pub mod series;
pub mod session;
pub mod table;
pub mod tooltip;

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::average::{build_average, AVERAGE_COLOR, AVERAGE_KEY};
    pub use crate::color::{assign_colors, group_letter, natural_cmp};
    pub use crate::header::{classify, HeaderConvention, HeaderLayout, MachineColumn};
    pub use crate::normalize::normalize;
    pub use crate::order::order_series;
    pub use crate::series::{build_series, DataPoint, Series, DATE_FORMAT};
    pub use crate::session::ChartSession;
    pub use crate::table::{RawTable, TableError};
    pub use crate::tooltip::{rows_for_date, DurationBand, TooltipRow};
}
