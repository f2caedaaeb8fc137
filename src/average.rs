//! # Cross-Series Daily Average
//!
//! Derives the synthetic "Average" series from the per-machine series:
//! for every date on which at least one machine recorded a session, the
//! mean of exactly the values recorded that date. Machines without a
//! session on a date do not contribute to the denominator.
//!
//! Grouping is by exact date-string equality. Two differently formatted
//! strings for the same calendar day land in different groups; this is a
//! known limitation of the source format and is deliberately not papered
//! over with calendar inference.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::series::{DataPoint, Series, DATE_FORMAT};

/// Display label of the derived average series.
pub const AVERAGE_KEY: &str = "Average";

/// Reserved color of the average series, outside every group palette.
pub const AVERAGE_COLOR: &str = "hsl(0, 0%, 13%)";

/// Build the average series from the already-built machine series.
///
/// Returns `None` when the input contains no points at all. The output
/// points are sorted chronologically by parsing each date string with
/// [`DATE_FORMAT`]; unparseable dates sort after parseable ones, tied by
/// raw string, so the order is still deterministic.
pub fn build_average(series: &[Series]) -> Option<Series> {
    let mut groups: HashMap<&str, (f64, u32)> = HashMap::new();

    for s in series.iter().filter(|s| !s.is_average) {
        for point in &s.points {
            let entry = groups.entry(point.date.as_str()).or_insert((0.0, 0));
            entry.0 += point.value;
            entry.1 += 1;
        }
    }

    if groups.is_empty() {
        return None;
    }

    let mut points: Vec<DataPoint> = groups
        .into_iter()
        .map(|(date, (sum, count))| DataPoint {
            date: date.to_string(),
            value: sum / f64::from(count),
            duration: None,
        })
        .collect();

    points.sort_by(|a, b| {
        let da = NaiveDate::parse_from_str(&a.date, DATE_FORMAT).ok();
        let db = NaiveDate::parse_from_str(&b.date, DATE_FORMAT).ok();
        match (da, db) {
            (Some(da), Some(db)) => da.cmp(&db),
            (Some(_), None) => std::cmp::Ordering::Less,
            (None, Some(_)) => std::cmp::Ordering::Greater,
            (None, None) => a.date.cmp(&b.date),
        }
    });

    log::debug!("average series spans {} dates", points.len());

    Some(Series {
        key: AVERAGE_KEY.to_string(),
        points,
        is_average: true,
        color: AVERAGE_COLOR.to_string(),
    })
}
