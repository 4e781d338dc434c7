//! fp-tables: in-memory output tables, identifier mapping and assembly.
//!
//! Every table the downstream tool reads is built here as a pure function
//! of already-extracted series plus configuration. Column order, marker
//! conventions and header strings are part of the external file contract.

pub mod assemble;
pub mod idmap;
pub mod setpoints;
pub mod table;

pub use assemble::{
    LoggerRow, flows_table, inlets_table, loggers_table, notes_table, pressures_table, times_table,
};
pub use idmap::IdMap;
pub use setpoints::{coerce_setpoints, read_pressure_setpoints};
pub use table::{Cell, Column, Table};

pub type TablesResult<T> = Result<T, TablesError>;

#[derive(thiserror::Error, Debug)]
pub enum TablesError {
    #[error(
        "Pressure setpoints must be absent or a sequence of numbers ({found} given)"
    )]
    SetpointShape { found: String },

    #[error("Series '{id}' has {got} rows, expected {expected}")]
    ColumnLengthMismatch {
        id: String,
        expected: usize,
        got: usize,
    },

    #[error("Table has no column {column} to read setpoints from")]
    MissingColumn { column: usize },

    #[error("Non-numeric setpoint cell at row {row}")]
    NonNumericSetpoint { row: usize },

    #[error(transparent)]
    Core(#[from] fp_core::CoreError),
}
