//! Output table assembly.
//!
//! Column ordering, marker placement and header text are consumed
//! downstream as-is; change nothing here without changing the reader.

use fp_core::contract::{
    FLOW_MARKER_HEADER, INLET_SET_MARKER, PRESSURE_MARKER_HEADER, SETPOINT_HEADER,
    SETPOINT_PLACEHOLDER,
};
use fp_core::{Cadence, CoreError};
use fp_series::Series;

use crate::idmap::IdMap;
use crate::table::{Cell, Table};
use crate::{TablesError, TablesResult};

/// Flows table: marker column first, flow-meter column second.
///
/// The series is already cadence-resampled. Under `OneHour` every row is a
/// cadence boundary, so every row is marked; under `FifteenMin` only every
/// `n_per_cadence`-th row is.
pub fn flows_table(
    flowmeter_id: &str,
    flows: &Series,
    cadence: Cadence,
    n_per_cadence: usize,
) -> TablesResult<Table> {
    if n_per_cadence == 0 {
        return Err(CoreError::InvalidSampleCount { value: 0 }.into());
    }

    let markers: Vec<Cell> = match cadence {
        Cadence::OneHour => (0..flows.len()).map(|_| Cell::from(INLET_SET_MARKER)).collect(),
        Cadence::FifteenMin => (0..flows.len()).map(|i| marker_cell(i, n_per_cadence)).collect(),
    };

    let mut table = Table::new();
    table.push_column(FLOW_MARKER_HEADER, markers);
    table.push_column(
        flowmeter_id,
        flows.values.iter().map(|&v| Cell::Float(v)).collect(),
    );
    Ok(table)
}

/// Pressures table: one column per extracted series, marker column
/// prepended, final raw row dropped, headers mapped to logger ids last.
pub fn pressures_table(
    series: &[Series],
    n_per_cadence: usize,
    id_map: &IdMap,
) -> TablesResult<Table> {
    if n_per_cadence == 0 {
        return Err(CoreError::InvalidSampleCount { value: 0 }.into());
    }

    let raw_rows = series.first().map_or(0, Series::len);
    for s in series {
        if s.len() != raw_rows {
            return Err(TablesError::ColumnLengthMismatch {
                id: s.id.clone(),
                expected: raw_rows,
                got: s.len(),
            });
        }
    }
    // The last raw sample is the simulation's closing boundary; the one
    // trimming applied to pressures.
    let rows = raw_rows.saturating_sub(1);

    let mut table = Table::new();
    table.push_column(
        PRESSURE_MARKER_HEADER,
        (0..rows).map(|i| marker_cell(i, n_per_cadence)).collect(),
    );
    for s in series {
        table.push_column(
            id_map.to_external(&s.id),
            s.values[..rows].iter().map(|&v| Cell::Float(v)).collect(),
        );
    }
    Ok(table)
}

/// Inlets table: one row for the inlet, setpoint columns per the
/// configured shape. Absent setpoints produce the manual placeholder.
pub fn inlets_table(
    inlet_junction_id: &str,
    id_map: &IdMap,
    valve_id: &str,
    setpoints: Option<&[f64]>,
) -> Table {
    let mut table = Table::new();
    table.push_column(
        "Flowmeter ID",
        vec![Cell::from(id_map.to_external(inlet_junction_id))],
    );
    table.push_column("Valve ID", vec![Cell::from(valve_id)]);
    table.push_column("Set of inlets", vec![Cell::from(INLET_SET_MARKER)]);

    match setpoints {
        None => {
            table.push_column(SETPOINT_HEADER, vec![Cell::from(SETPOINT_PLACEHOLDER)]);
        }
        Some(values) => {
            for (ix, &value) in values.iter().enumerate() {
                let header = if ix == 0 {
                    SETPOINT_HEADER.to_string()
                } else {
                    format!("p_{}", ix + 1)
                };
                table.push_column(header, vec![Cell::Float(value)]);
            }
        }
    }
    table
}

/// Times table: two fixed named rows, values straight from configuration.
/// Written headerless.
pub fn times_table(start_time_min: i64, measurement_step_min: i64) -> Table {
    let mut table = Table::new();
    table.push_column(
        "name",
        vec![
            Cell::from("Start time (minutes after midnight)"),
            Cell::from("Measurements time step (minutes)"),
        ],
    );
    table.push_column(
        "value",
        vec![Cell::Int(start_time_min), Cell::Int(measurement_step_min)],
    );
    table
}

/// One configured logger, as it appears on the `loggers` sheet.
#[derive(Debug, Clone)]
pub struct LoggerRow {
    pub logger_id: String,
    pub network_id: String,
    pub kind: String,
}

/// Loggers table: passthrough description of the measurement devices.
pub fn loggers_table(rows: &[LoggerRow]) -> Table {
    let mut table = Table::new();
    table.push_column(
        "Logger ID",
        rows.iter().map(|r| Cell::from(r.logger_id.as_str())).collect(),
    );
    table.push_column(
        "Network ID",
        rows.iter().map(|r| Cell::from(r.network_id.as_str())).collect(),
    );
    table.push_column(
        "Type",
        rows.iter().map(|r| Cell::from(r.kind.as_str())).collect(),
    );
    table
}

/// Notes table: opaque free-text rows. Written headerless.
pub fn notes_table(lines: &[String]) -> Table {
    let mut table = Table::new();
    table.push_column(
        "notes",
        lines.iter().map(|l| Cell::from(l.as_str())).collect(),
    );
    table
}

fn marker_cell(row: usize, n_per_cadence: usize) -> Cell {
    if row % n_per_cadence == 0 {
        Cell::from(INLET_SET_MARKER)
    } else {
        Cell::Empty
    }
}
