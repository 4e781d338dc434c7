//! Configuration schema definitions.

use std::collections::BTreeMap;

use fp_core::Cadence;
use fp_core::cadence::DEFAULT_SAMPLES_PER_CADENCE;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    pub name: String,
    #[serde(default)]
    pub loggers: Vec<LoggerDef>,
    /// Internal network id -> external logger id. Ids absent from the map
    /// pass through unchanged.
    #[serde(default)]
    pub id_map: BTreeMap<String, String>,
    pub inlet: InletDef,
    pub sampling: SamplingDef,
    pub window: WindowDef,
    #[serde(default)]
    pub notes: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LoggerDef {
    pub logger_id: String,
    pub network_id: String,
    #[serde(default)]
    pub kind: LoggerKind,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LoggerKind {
    #[default]
    Pressure,
    Flow,
}

impl LoggerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LoggerKind::Pressure => "pressure",
            LoggerKind::Flow => "flow",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InletDef {
    /// Network junction instrumented with the inlet flow meter.
    pub junction_id: String,
    /// Network link whose flow series feeds the flows table.
    pub link_id: String,
    /// Pressure-reducing valve at the inlet.
    pub valve_id: String,
    /// Raw configured value; shape-checked at assembly time. Absent means
    /// "to be set manually".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pressure_setpoints: Option<serde_yaml::Value>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SamplingDef {
    pub cadence: Cadence,
    /// Raw samples per cadence interval; must evenly relate the raw
    /// sampling interval to the cadence.
    #[serde(default = "default_samples_per_cadence")]
    pub samples_per_cadence: usize,
    /// Simulation start, minutes after midnight.
    pub start_time_min: i64,
    /// Measurement step in minutes.
    pub measurement_step_min: i64,
}

fn default_samples_per_cadence() -> usize {
    DEFAULT_SAMPLES_PER_CADENCE
}

/// Extraction window over the simulation horizon, in hours from start.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct WindowDef {
    pub start_hr: f64,
    pub end_hr: f64,
}
