//! Marker-column contract shared by table assembly and setpoint recovery.
//!
//! The pressures/flows assemblers write the marker, the setpoint reader
//! selects rows by it. Both sides must use these constants; the marker
//! value and the column positions are part of the downstream tool's file
//! contract.

/// Cell value flagging a row that falls on a cadence boundary.
pub const INLET_SET_MARKER: &str = "A";

/// Header of the pressures table marker column (always column 0).
pub const PRESSURE_MARKER_HEADER: &str = "Logger ID → Set of inlets ↓";

/// Header of the flows table marker column (always column 0).
pub const FLOW_MARKER_HEADER: &str = "Flowmeter ID → Set of inlets ↓";

/// Column read back by setpoint recovery: the first value column after
/// the marker.
pub const SETPOINT_VALUE_COLUMN: usize = 1;

/// Header of the first (or only) setpoint column in the inlets table.
pub const SETPOINT_HEADER: &str = "PRV pressure setpoints [m]";

/// Placeholder written when no setpoints are configured.
pub const SETPOINT_PLACEHOLDER: &str = "!!!TO BE SET MANUALLY!!!";
