//! # Series Ordering Policy
//!
//! Arranges the final series array for the renderer: the average series
//! always leads; the machines follow either in source-column order or,
//! with grouped display enabled, sorted by the same natural comparison
//! the color assigner uses, so machines of one group sit together in the
//! legend. Ordering only rearranges; colors are never touched here.

use crate::color::natural_cmp;
use crate::series::Series;

/// Order a series array for display.
///
/// Idempotent: applying the same `group_mode` twice yields the same
/// order, and every series keeps its already-assigned color.
pub fn order_series(series: Vec<Series>, group_mode: bool) -> Vec<Series> {
    let (mut averages, mut machines): (Vec<Series>, Vec<Series>) =
        series.into_iter().partition(|s| s.is_average);

    if group_mode {
        machines.sort_by(|a, b| natural_cmp(&a.key, &b.key));
    }

    averages.extend(machines);
    averages
}
