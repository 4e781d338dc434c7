use thiserror::Error;

pub type CoreResult<T> = Result<T, CoreError>;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Unrecognized measurement cadence '{literal}' (expected '15min' or '1hr')")]
    InvalidCadence { literal: String },

    #[error("Invalid samples-per-cadence count: {value} (must be at least 1)")]
    InvalidSampleCount { value: usize },

    #[error("Invalid time window: start {start_s} s is after end {end_s} s")]
    InvalidWindow { start_s: i64, end_s: i64 },
}
