//! fp-series: simulation result sets, time-window extraction and
//! cadence resampling.

pub mod extract;
pub mod resample;
pub mod resultset;

pub use extract::{inlet_flows, node_pressures};
pub use resample::resample;
pub use resultset::{LinkFlow, NodePressure, ResultSet, Series, StepRecord};

pub type SeriesResult<T> = Result<T, SeriesError>;

#[derive(thiserror::Error, Debug)]
pub enum SeriesError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No series recorded for identifier '{id}'")]
    UnknownId { id: String },

    #[error("Result set is inconsistent at t={time_s} s: {what}")]
    Inconsistent { time_s: i64, what: String },

    #[error(transparent)]
    Core(#[from] fp_core::CoreError),
}
