//! # Chart Session
//!
//! One loaded file equals one [`ChartSession`]: the full pipeline runs
//! exactly once per load (ingest, classify, build, average, color), and
//! the session keeps the built series plus the color map. Re-ordering
//! for the grouped-display toggle works off the cached data and never
//! re-derives colors, so toggling cannot flicker a machine's color.
//!
//! Loading a new file means constructing a new session; nothing is
//! merged or carried over.

use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

use crate::average::build_average;
use crate::header::{classify, HeaderLayout};
use crate::order::order_series;
use crate::series::{build_series, Series};
use crate::table::{RawTable, TableError};

/// The per-load pipeline state: built series and assigned colors.
#[derive(Debug, Clone)]
pub struct ChartSession {
    layout: HeaderLayout,
    series: Vec<Series>,
    colors: HashMap<String, String>,
}

impl ChartSession {
    /// Load a log export from a file path and run the full pipeline.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
        Self::from_table(RawTable::from_path(path)?)
    }

    /// Load a log export from any reader and run the full pipeline.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, TableError> {
        Self::from_table(RawTable::from_reader(reader)?)
    }

    /// Run the pipeline over an already-ingested table.
    pub fn from_table(table: RawTable) -> Result<Self, TableError> {
        let layout = classify(&table.header);
        let mut machines = build_series(&table.rows, &layout);

        let keys: Vec<&str> = machines.iter().map(|s| s.key.as_str()).collect();
        let colors = crate::color::assign_colors(&keys);
        for series in &mut machines {
            if let Some(color) = colors.get(&series.key) {
                series.color = color.clone();
            }
        }

        let mut series = machines;
        if let Some(average) = build_average(&series) {
            series.push(average);
        }

        log::info!(
            "session ready: {} series ({} machines)",
            series.len(),
            layout.machines.len()
        );

        Ok(Self {
            layout,
            series,
            colors,
        })
    }

    /// The detected header layout.
    pub fn layout(&self) -> &HeaderLayout {
        &self.layout
    }

    /// All built series in source order, average last.
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    /// The color assigned to a machine key, if the key yielded a series.
    pub fn color_of(&self, key: &str) -> Option<&str> {
        self.colors.get(key).map(String::as_str)
    }

    /// The display-ordered series array for the renderer.
    pub fn ordered_series(&self, group_mode: bool) -> Vec<Series> {
        order_series(self.series.clone(), group_mode)
    }

    /// Serialize the display-ordered series array to JSON.
    pub fn to_json(&self, group_mode: bool, pretty: bool) -> Result<String, serde_json::Error> {
        let ordered = self.ordered_series(group_mode);
        if pretty {
            serde_json::to_string_pretty(&ordered)
        } else {
            serde_json::to_string(&ordered)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    const SAMPLE: &str = "\
Datum;A1;;A2;;B1;
01.01.2024;100;110;200;130;50;
02.01.2024;105;115;;;55;
";

    #[test]
    fn test_pipeline_end_to_end() {
        let session = ChartSession::from_reader(Cursor::new(SAMPLE)).unwrap();

        let keys: Vec<_> = session.series().iter().map(|s| s.key.as_str()).collect();
        assert_eq!(keys, vec!["A1", "A2", "B1", "Average"]);

        let a2 = &session.series()[1];
        assert_eq!(a2.points.len(), 1);
        assert_eq!(a2.points[0].date, "01.01.2024");

        let average = session.series().last().unwrap();
        assert!(average.is_average);
        assert!((average.points[0].value - 350.0 / 3.0).abs() < 0.01);
        assert!((average.points[1].value - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_toggling_order_keeps_colors() {
        let session = ChartSession::from_reader(Cursor::new(SAMPLE)).unwrap();

        let flat = session.ordered_series(false);
        let grouped = session.ordered_series(true);

        for series in &grouped {
            let other = flat.iter().find(|s| s.key == series.key).unwrap();
            assert_eq!(series.color, other.color);
        }
        assert_eq!(grouped[0].key, "Average");
    }

    #[test]
    fn test_color_cache_matches_series() {
        let session = ChartSession::from_reader(Cursor::new(SAMPLE)).unwrap();
        for series in session.series().iter().filter(|s| !s.is_average) {
            assert_eq!(session.color_of(&series.key), Some(series.color.as_str()));
        }
    }
}
