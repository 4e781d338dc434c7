//! Declared measurement cadence for downstream analysis.
//!
//! Distinct from the raw simulation sampling interval: the solver may
//! sample every 15 minutes while the loggers report hourly.

use core::fmt;
use core::str::FromStr;

use crate::error::CoreError;

/// Raw samples per cadence interval when the cadence is hourly and the
/// solver samples every 15 minutes.
pub const DEFAULT_SAMPLES_PER_CADENCE: usize = 4;

/// Measurement cadence declared by the logger configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub enum Cadence {
    /// Every raw sample is a measurement.
    FifteenMin,
    /// One measurement per hour of raw samples.
    OneHour,
}

impl Cadence {
    /// Wire literal used in configuration files and by the downstream tool.
    pub fn literal(self) -> &'static str {
        match self {
            Cadence::FifteenMin => "15min",
            Cadence::OneHour => "1hr",
        }
    }
}

impl FromStr for Cadence {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "15min" => Ok(Cadence::FifteenMin),
            "1hr" => Ok(Cadence::OneHour),
            other => Err(CoreError::InvalidCadence {
                literal: other.to_string(),
            }),
        }
    }
}

impl TryFrom<String> for Cadence {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Cadence> for String {
    fn from(value: Cadence) -> Self {
        value.literal().to_string()
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.literal())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_both_literals() {
        assert_eq!("15min".parse::<Cadence>().unwrap(), Cadence::FifteenMin);
        assert_eq!("1hr".parse::<Cadence>().unwrap(), Cadence::OneHour);
    }

    #[test]
    fn rejects_unknown_literal() {
        let err = "hourly".parse::<Cadence>().unwrap_err();
        match err {
            CoreError::InvalidCadence { literal } => assert_eq!(literal, "hourly"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn literal_round_trip() {
        for cadence in [Cadence::FifteenMin, Cadence::OneHour] {
            assert_eq!(cadence.literal().parse::<Cadence>().unwrap(), cadence);
        }
    }
}
