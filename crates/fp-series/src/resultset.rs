//! Simulation result set model and JSON Lines persistence.
//!
//! The hydraulic solver runs out-of-process; its output is consumed here
//! as an immutable artifact. On disk a result set is one JSON record per
//! solver time step.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::{SeriesError, SeriesResult};

/// One solver time step: pressure per node, flow per link.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StepRecord {
    pub time_s: i64,
    pub node_pressures: Vec<NodePressure>,
    pub link_flows: Vec<LinkFlow>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodePressure {
    pub node_id: String,
    /// Pressure head in meters.
    pub pressure_m: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkFlow {
    pub link_id: String,
    /// Flow in the solver's native m³/s; converted during extraction.
    pub flow_m3_s: f64,
}

/// A single extracted time series for one identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    pub id: String,
    pub time_s: Vec<i64>,
    pub values: Vec<f64>,
}

impl Series {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Columnar view of a solver run: one shared time axis, one value column
/// per node and per link. Immutable once built.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    time_s: Vec<i64>,
    node_pressure: BTreeMap<String, Vec<f64>>,
    link_flow: BTreeMap<String, Vec<f64>>,
}

impl ResultSet {
    /// Build a result set from per-step records.
    ///
    /// Every record must carry the same node and link identifiers as the
    /// first one, and time must be strictly increasing.
    pub fn from_records(records: &[StepRecord]) -> SeriesResult<Self> {
        let Some(first) = records.first() else {
            return Ok(Self::default());
        };

        let mut set = Self::default();
        for np in &first.node_pressures {
            set.node_pressure.insert(np.node_id.clone(), Vec::new());
        }
        for lf in &first.link_flows {
            set.link_flow.insert(lf.link_id.clone(), Vec::new());
        }

        let mut last_time = None;
        for record in records {
            if let Some(prev) = last_time
                && record.time_s <= prev
            {
                return Err(SeriesError::Inconsistent {
                    time_s: record.time_s,
                    what: "time axis is not strictly increasing".to_string(),
                });
            }
            last_time = Some(record.time_s);

            if record.node_pressures.len() != set.node_pressure.len()
                || record.link_flows.len() != set.link_flow.len()
            {
                return Err(SeriesError::Inconsistent {
                    time_s: record.time_s,
                    what: "record does not cover the same identifiers as the first step"
                        .to_string(),
                });
            }

            set.time_s.push(record.time_s);
            for np in &record.node_pressures {
                let column = set.node_pressure.get_mut(&np.node_id).ok_or_else(|| {
                    SeriesError::Inconsistent {
                        time_s: record.time_s,
                        what: format!("unexpected node '{}'", np.node_id),
                    }
                })?;
                column.push(np.pressure_m);
            }
            for lf in &record.link_flows {
                let column = set.link_flow.get_mut(&lf.link_id).ok_or_else(|| {
                    SeriesError::Inconsistent {
                        time_s: record.time_s,
                        what: format!("unexpected link '{}'", lf.link_id),
                    }
                })?;
                column.push(lf.flow_m3_s);
            }
        }

        // A duplicated identifier inside a record passes the count check
        // but leaves its column over-filled; catch it before anything
        // downstream indexes by row.
        let rows = set.time_s.len();
        if set.node_pressure.values().any(|c| c.len() != rows)
            || set.link_flow.values().any(|c| c.len() != rows)
        {
            return Err(SeriesError::Inconsistent {
                time_s: last_time.unwrap_or(0),
                what: "duplicate identifier within a record".to_string(),
            });
        }

        Ok(set)
    }

    pub fn len(&self) -> usize {
        self.time_s.len()
    }

    pub fn is_empty(&self) -> bool {
        self.time_s.is_empty()
    }

    pub fn time_s(&self) -> &[i64] {
        &self.time_s
    }

    pub fn node_ids(&self) -> impl Iterator<Item = &str> {
        self.node_pressure.keys().map(String::as_str)
    }

    pub fn link_ids(&self) -> impl Iterator<Item = &str> {
        self.link_flow.keys().map(String::as_str)
    }

    /// Pressure column for a node, aligned with `time_s`.
    pub fn node_pressures(&self, node_id: &str) -> Option<&[f64]> {
        self.node_pressure.get(node_id).map(Vec::as_slice)
    }

    /// Flow column for a link, aligned with `time_s`, in solver units (m³/s).
    pub fn link_flows(&self, link_id: &str) -> Option<&[f64]> {
        self.link_flow.get(link_id).map(Vec::as_slice)
    }

    /// Reconstruct per-step records (inverse of `from_records`).
    pub fn to_records(&self) -> Vec<StepRecord> {
        self.time_s
            .iter()
            .enumerate()
            .map(|(row, &time_s)| StepRecord {
                time_s,
                node_pressures: self
                    .node_pressure
                    .iter()
                    .map(|(id, values)| NodePressure {
                        node_id: id.clone(),
                        pressure_m: values[row],
                    })
                    .collect(),
                link_flows: self
                    .link_flow
                    .iter()
                    .map(|(id, values)| LinkFlow {
                        link_id: id.clone(),
                        flow_m3_s: values[row],
                    })
                    .collect(),
            })
            .collect()
    }

    /// Load a result set from a JSON Lines file, one step record per line.
    pub fn load_jsonl(path: &Path) -> SeriesResult<Self> {
        let content = fs::read_to_string(path)?;
        let mut records = Vec::new();
        for line in content.lines() {
            if !line.trim().is_empty() {
                let record: StepRecord = serde_json::from_str(line)?;
                records.push(record);
            }
        }
        Self::from_records(&records)
    }

    /// Save a result set as a JSON Lines file.
    pub fn save_jsonl(&self, path: &Path) -> SeriesResult<()> {
        let mut content = String::new();
        for record in self.to_records() {
            content.push_str(&serde_json::to_string(&record)?);
            content.push('\n');
        }
        fs::write(path, content)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_step_records() -> Vec<StepRecord> {
        vec![
            StepRecord {
                time_s: 0,
                node_pressures: vec![NodePressure {
                    node_id: "J1".to_string(),
                    pressure_m: 32.0,
                }],
                link_flows: vec![LinkFlow {
                    link_id: "P1".to_string(),
                    flow_m3_s: 0.002,
                }],
            },
            StepRecord {
                time_s: 900,
                node_pressures: vec![NodePressure {
                    node_id: "J1".to_string(),
                    pressure_m: 31.5,
                }],
                link_flows: vec![LinkFlow {
                    link_id: "P1".to_string(),
                    flow_m3_s: 0.003,
                }],
            },
        ]
    }

    #[test]
    fn builds_columns_from_records() {
        let set = ResultSet::from_records(&two_step_records()).unwrap();
        assert_eq!(set.len(), 2);
        assert_eq!(set.time_s(), &[0, 900]);
        assert_eq!(set.node_pressures("J1").unwrap(), &[32.0, 31.5]);
        assert_eq!(set.link_flows("P1").unwrap(), &[0.002, 0.003]);
        assert!(set.node_pressures("J2").is_none());
    }

    #[test]
    fn rejects_non_increasing_time() {
        let mut records = two_step_records();
        records[1].time_s = 0;
        let err = ResultSet::from_records(&records).unwrap_err();
        assert!(matches!(err, SeriesError::Inconsistent { time_s: 0, .. }));
    }

    #[test]
    fn rejects_mismatched_identifier_sets() {
        let mut records = two_step_records();
        records[1].node_pressures.clear();
        assert!(ResultSet::from_records(&records).is_err());
    }

    #[test]
    fn rejects_duplicate_identifier_within_a_record() {
        let mut records = two_step_records();
        records[1].node_pressures = vec![
            NodePressure {
                node_id: "J1".to_string(),
                pressure_m: 31.5,
            },
            NodePressure {
                node_id: "J1".to_string(),
                pressure_m: 31.6,
            },
        ];
        records[0].node_pressures.push(NodePressure {
            node_id: "J2".to_string(),
            pressure_m: 29.0,
        });
        assert!(ResultSet::from_records(&records).is_err());
    }

    #[test]
    fn empty_record_list_is_an_empty_set() {
        let set = ResultSet::from_records(&[]).unwrap();
        assert!(set.is_empty());
    }
}
