//! Integration tests for liftchart
//!
//! These tests verify the full pipeline from raw log text to the
//! ordered, colored series array handed to the renderer.

use liftchart::prelude::*;

const SAMPLE: &str = "\
Datum;A1;;A2;;B1;
01.01.2024;100;110;200;130;50;
02.01.2024;105;115;;;55;
";

#[test]
fn test_full_pipeline_scenario() {
    let session = ChartSession::from_reader(SAMPLE.as_bytes()).unwrap();
    let series = session.ordered_series(false);

    let keys: Vec<_> = series.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["Average", "A1", "A2", "B1"]);

    let a1 = &series[1];
    assert_eq!(a1.points.len(), 2);
    assert_eq!(a1.points[0].duration, Some(110.0));

    let a2 = &series[2];
    assert_eq!(a2.points.len(), 1);
    assert_eq!(a2.points[0].date, "01.01.2024");

    let b1 = &series[3];
    assert_eq!(b1.points.len(), 2);

    let average = &series[0];
    assert!(average.is_average);
    assert_eq!(average.color, AVERAGE_COLOR);
    assert_eq!(average.points.len(), 2);
    assert!((average.points[0].value - (100.0 + 200.0 + 50.0) / 3.0).abs() < 0.01);
    assert!((average.points[1].value - 80.0).abs() < 1e-9);
}

#[test]
fn test_grouped_toggle_reorders_without_recoloring() {
    let input = "\
Datum;B1;;A10;;A2;
01.01.2024;50;120;80;130;40;
";
    let session = ChartSession::from_reader(input.as_bytes()).unwrap();

    let flat = session.ordered_series(false);
    let flat_keys: Vec<_> = flat.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(flat_keys, vec!["Average", "B1", "A10", "A2"]);

    let grouped = session.ordered_series(true);
    let grouped_keys: Vec<_> = grouped.iter().map(|s| s.key.as_str()).collect();
    assert_eq!(grouped_keys, vec!["Average", "A2", "A10", "B1"]);

    // Same colors in both arrangements.
    for series in &grouped {
        let other = flat.iter().find(|s| s.key == series.key).unwrap();
        assert_eq!(series.color, other.color);
    }

    // A2 precedes A10 in natural order, so it holds the group base.
    let a2 = grouped.iter().find(|s| s.key == "A2").unwrap();
    assert_eq!(a2.color, "hsl(210, 70%, 50%)");
}

#[test]
fn test_colors_independent_of_column_order() {
    let forward = "Datum;A1;;A2;\n01.01.2024;100;;200;\n";
    let backward = "Datum;A2;;A1;\n01.01.2024;200;;100;\n";

    let a = ChartSession::from_reader(forward.as_bytes()).unwrap();
    let b = ChartSession::from_reader(backward.as_bytes()).unwrap();

    assert_eq!(a.color_of("A1"), b.color_of("A1"));
    assert_eq!(a.color_of("A2"), b.color_of("A2"));
}

#[test]
fn test_labeled_header_convention() {
    let input = "\
Date;A1;A1 sec;B2 kg
01.01.2024;100;130;60
";
    let session = ChartSession::from_reader(input.as_bytes()).unwrap();

    let keys: Vec<_> = session.series().iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["A1", "B2", "Average"]);

    // Fully labeled convention drops duration columns without pairing.
    let a1 = &session.series()[0];
    assert_eq!(a1.points[0].duration, None);
}

#[test]
fn test_machines_without_points_are_dropped() {
    let input = "\
Datum;A1;;A2;
01.01.2024;100;;;
02.01.2024;105;;n/a;
";
    let session = ChartSession::from_reader(input.as_bytes()).unwrap();
    let keys: Vec<_> = session.series().iter().map(|s| s.key.as_str()).collect();
    assert_eq!(keys, vec!["A1", "Average"]);
}

#[test]
fn test_no_valid_points_means_no_average() {
    let input = "Datum;A1;\n01.01.2024;n/a;\n";
    let session = ChartSession::from_reader(input.as_bytes()).unwrap();
    assert!(session.series().is_empty());
}

#[test]
fn test_empty_file_is_a_terminal_error() {
    let err = ChartSession::from_reader("".as_bytes()).unwrap_err();
    assert!(matches!(err, TableError::MissingHeader));

    let err = ChartSession::from_reader("Datum;A1;\n".as_bytes()).unwrap_err();
    assert!(matches!(err, TableError::NoDataRows));
}

#[test]
fn test_tooltip_rows_for_hovered_date() {
    let session = ChartSession::from_reader(SAMPLE.as_bytes()).unwrap();
    let series = session.ordered_series(false);

    let rows = rows_for_date(&series, "01.01.2024");
    assert_eq!(rows.len(), 4);

    // Average row leads and never carries a duration.
    assert_eq!(rows[0].key, "Average");
    assert!(rows[0].duration.is_none());

    let a1 = rows.iter().find(|r| r.key == "A1").unwrap();
    assert_eq!(a1.duration, Some((110.0, DurationBand::Bad)));
    let a2 = rows.iter().find(|r| r.key == "A2").unwrap();
    assert_eq!(a2.duration, Some((130.0, DurationBand::Ok)));

    // On 02.01 the machines without sessions produce no rows.
    let rows = rows_for_date(&series, "02.01.2024");
    let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, vec!["Average", "A1", "B1"]);
}

#[test]
fn test_serialized_hand_off_shape() {
    let session = ChartSession::from_reader(SAMPLE.as_bytes()).unwrap();
    let json = session.to_json(false, false).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let arr = value.as_array().unwrap();
    assert_eq!(arr.len(), 4);
    assert_eq!(arr[0]["key"], "Average");
    assert_eq!(arr[0]["isAverage"], true);
    assert!(arr[0]["color"].as_str().unwrap().starts_with("hsl("));
    assert_eq!(arr[1]["points"][0]["date"], "01.01.2024");
    assert_eq!(arr[1]["points"][0]["duration"], 110.0);
}
