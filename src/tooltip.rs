//! # Tooltip Content Support
//!
//! The rendering collaborator shows one tooltip row per series for a
//! hovered date: color swatch, series key, formatted value, and for
//! machine series a duration classified into three severity bands. The
//! band thresholds are fixed; the average row never carries a duration
//! cell, by contract.

use serde::Serialize;

use crate::series::Series;

/// Duration below this many seconds is a bad session.
const BAND_OK_FROM: f64 = 120.0;

/// Duration at or above this many seconds is a good session.
const BAND_GOOD_FROM: f64 = 150.0;

/// Severity band of a session duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DurationBand {
    /// Below 120 seconds.
    Bad,
    /// 120 to 149 seconds.
    Ok,
    /// 150 seconds or more.
    Good,
}

impl DurationBand {
    /// Classify a duration in seconds.
    pub fn classify(seconds: f64) -> Self {
        if seconds < BAND_OK_FROM {
            Self::Bad
        } else if seconds < BAND_GOOD_FROM {
            Self::Ok
        } else {
            Self::Good
        }
    }

    /// Stable lowercase name, usable as a CSS class.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Bad => "bad",
            Self::Ok => "ok",
            Self::Good => "good",
        }
    }
}

/// One tooltip row: everything the renderer needs to format a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipRow {
    /// Series display label.
    pub key: String,
    /// Series color, for the swatch.
    pub color: String,
    /// Value recorded on the hovered date.
    pub value: f64,
    /// Duration with its severity band; absent for the average series
    /// and for points without duration data.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<(f64, DurationBand)>,
}

/// Collect the tooltip rows for one hovered date, in series order.
///
/// Series without a point on that exact date string produce no row.
pub fn rows_for_date(series: &[Series], date: &str) -> Vec<TooltipRow> {
    series
        .iter()
        .filter_map(|s| {
            let point = s.points.iter().find(|p| p.date == date)?;
            let duration = if s.is_average {
                None
            } else {
                point.duration.map(|d| (d, DurationBand::classify(d)))
            };
            Some(TooltipRow {
                key: s.key.clone(),
                color: s.color.clone(),
                value: point.value,
                duration,
            })
        })
        .collect()
}
