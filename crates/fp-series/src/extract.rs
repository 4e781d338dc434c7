//! Time-window extraction from a result set.
//!
//! Pure projections: nothing here mutates the source. The window is
//! inclusive on both ends; an identifier with no series in the source is
//! a hard `UnknownId` error so a table is never assembled with missing
//! columns.

use fp_core::{TimeWindow, flow_m3s_to_m3h};

use crate::resultset::{ResultSet, Series};
use crate::{SeriesError, SeriesResult};

/// Extract one pressure series per node identifier, sliced to the window.
pub fn node_pressures(
    ids: &[String],
    source: &ResultSet,
    window: TimeWindow,
) -> SeriesResult<Vec<Series>> {
    ids.iter()
        .map(|id| {
            let values = source
                .node_pressures(id)
                .ok_or_else(|| SeriesError::UnknownId { id: id.clone() })?;
            Ok(slice_to_window(id, source.time_s(), values, window))
        })
        .collect()
}

/// Extract the flow series for an inlet link, sliced to the window.
///
/// The final sample of the slice is the simulation's closing boundary, not
/// a measurement, and is dropped here; this is the only place the drop is
/// applied to flows. Values are converted from the solver's m³/s to m³/h.
pub fn inlet_flows(source: &ResultSet, link_id: &str, window: TimeWindow) -> SeriesResult<Series> {
    let values = source
        .link_flows(link_id)
        .ok_or_else(|| SeriesError::UnknownId {
            id: link_id.to_string(),
        })?;
    let mut series = slice_to_window(link_id, source.time_s(), values, window);
    if !series.is_empty() {
        series.time_s.pop();
        series.values.pop();
    }
    for value in &mut series.values {
        *value = flow_m3s_to_m3h(*value);
    }
    Ok(series)
}

fn slice_to_window(id: &str, time_s: &[i64], values: &[f64], window: TimeWindow) -> Series {
    let mut out = Series {
        id: id.to_string(),
        time_s: Vec::new(),
        values: Vec::new(),
    };
    for (&t, &v) in time_s.iter().zip(values) {
        if window.contains(t) {
            out.time_s.push(t);
            out.values.push(v);
        }
    }
    out
}
