//! # Series Model and Builder
//!
//! The chart-facing data model: one [`Series`] per machine, each holding
//! ordered [`DataPoint`]s of (date, value, optional duration). The builder
//! walks the data rows once per machine column, normalizing cells through
//! [`crate::normalize`], and silently skips anything that does not yield
//! both a date and a finite value. Sparse logs are the norm, not an error.
//!
//! Serialization uses camelCase field names because the consumer is a
//! JavaScript charting component.

use serde::Serialize;

use crate::header::HeaderLayout;
use crate::normalize::normalize;

/// Textual date format used by the export: two-digit day, two-digit
/// month, four-digit year, period-separated.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// One recorded session observation for a machine.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataPoint {
    /// Date token exactly as it appears in the log.
    pub date: String,
    /// Primary value (weight setting), always present and finite.
    pub value: f64,
    /// Paired duration in seconds, when the log carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<f64>,
}

/// One chart series: a machine's session history, or the derived average.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Series {
    /// Display label (machine code, or the average label).
    pub key: String,
    /// Session points in source-row order (the average series is sorted
    /// chronologically instead).
    pub points: Vec<DataPoint>,
    /// Whether this is the synthetic average series.
    pub is_average: bool,
    /// Display color, assigned once per loaded file.
    pub color: String,
}

/// Build one series per machine column from the data rows.
///
/// A point is emitted only when the row's date cell is non-empty and its
/// value cell normalizes to a finite number. Rows failing either test are
/// skipped for that machine without affecting other machines. Machines
/// that end up with zero points are dropped entirely.
///
/// Colors are not assigned here; see [`crate::color::assign_colors`].
pub fn build_series(rows: &[Vec<String>], layout: &HeaderLayout) -> Vec<Series> {
    let mut series = Vec::with_capacity(layout.machines.len());

    for machine in &layout.machines {
        let mut points = Vec::new();

        for row in rows {
            let date = match row.get(layout.date_index) {
                Some(cell) if !cell.trim().is_empty() => cell.trim(),
                _ => continue,
            };
            let value = match normalize(row.get(machine.index).map(String::as_str)) {
                Some(v) => v,
                None => continue,
            };
            let duration = machine
                .duration_index
                .and_then(|i| normalize(row.get(i).map(String::as_str)));

            points.push(DataPoint {
                date: date.to_string(),
                value,
                duration,
            });
        }

        if points.is_empty() {
            log::debug!("machine {} has no valid points, dropping", machine.name);
            continue;
        }

        series.push(Series {
            key: machine.name.clone(),
            points,
            is_average: false,
            color: String::new(),
        });
    }

    series
}
