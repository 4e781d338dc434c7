//! Setpoint coercion and recovery.
//!
//! Recovery is the read side of the marker-column contract in
//! `fp_core::contract`: the pressures assembler writes the marker, this
//! module selects rows by it and reads the first value column.

use fp_core::contract::SETPOINT_VALUE_COLUMN;
use serde_yaml::Value;

use crate::table::Table;
use crate::{TablesError, TablesResult};

/// Coerce the raw configured `pressure_setpoints` value.
///
/// Accepted shapes: absent/null (no setpoints configured, the assembler
/// writes the manual placeholder) or a sequence of finite numbers. A
/// scalar, a string, a mapping, or a sequence with non-numeric entries is
/// a `SetpointShape` error, never a silent default.
pub fn coerce_setpoints(raw: Option<&Value>) -> TablesResult<Option<Vec<f64>>> {
    let Some(value) = raw else {
        return Ok(None);
    };
    match value {
        Value::Null => Ok(None),
        Value::Sequence(entries) => {
            let mut setpoints = Vec::with_capacity(entries.len());
            for entry in entries {
                let number = entry
                    .as_f64()
                    .filter(|v| v.is_finite())
                    .ok_or_else(|| TablesError::SetpointShape {
                        found: shape_name(entry).to_string(),
                    })?;
                setpoints.push(number);
            }
            Ok(Some(setpoints))
        }
        other => Err(TablesError::SetpointShape {
            found: shape_name(other).to_string(),
        }),
    }
}

fn shape_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(n) if n.as_f64().is_some_and(f64::is_finite) => "a bare number",
        Value::Number(_) => "a non-finite number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Read the pressure setpoints back from an assembled pressures table.
///
/// Selects rows whose marker column (column 0) is non-empty and returns
/// the values of the first logger column at those rows, in row order.
pub fn read_pressure_setpoints(table: &Table) -> TablesResult<Vec<f64>> {
    let marker = table
        .columns
        .first()
        .ok_or(TablesError::MissingColumn { column: 0 })?;
    let values = table
        .columns
        .get(SETPOINT_VALUE_COLUMN)
        .ok_or(TablesError::MissingColumn {
            column: SETPOINT_VALUE_COLUMN,
        })?;

    let mut setpoints = Vec::new();
    for (row, cell) in marker.cells.iter().enumerate() {
        if cell.is_empty() {
            continue;
        }
        let value = values
            .cells
            .get(row)
            .and_then(|c| c.as_f64())
            .ok_or(TablesError::NonNumericSetpoint { row })?;
        setpoints.push(value);
    }
    Ok(setpoints)
}
