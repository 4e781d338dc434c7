//! Cadence resampling of an extracted series.

use fp_core::{Cadence, CoreError};

use crate::resultset::Series;
use crate::SeriesResult;

/// Reduce a series to the declared measurement cadence.
///
/// `FifteenMin` keeps every sample. `OneHour` keeps sample `i` iff
/// `i % n_per_cadence == 0`; the rest are dropped, not zeroed.
/// `n_per_cadence` must evenly relate the raw sampling interval to the
/// cadence or the result silently misaligns; it is validated configuration,
/// not a convenience default.
///
/// Any closing-boundary trim has already happened upstream; this function
/// never drops rows beyond the cadence rule.
pub fn resample(series: &Series, cadence: Cadence, n_per_cadence: usize) -> SeriesResult<Series> {
    if n_per_cadence == 0 {
        return Err(CoreError::InvalidSampleCount { value: 0 }.into());
    }
    match cadence {
        Cadence::FifteenMin => Ok(series.clone()),
        Cadence::OneHour => {
            let keep = |i: &usize| i % n_per_cadence == 0;
            Ok(Series {
                id: series.id.clone(),
                time_s: series
                    .time_s
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| keep(i))
                    .map(|(_, &t)| t)
                    .collect(),
                values: series
                    .values
                    .iter()
                    .enumerate()
                    .filter(|(i, _)| keep(i))
                    .map(|(_, &v)| v)
                    .collect(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SeriesError;

    fn series_of(n: usize) -> Series {
        Series {
            id: "P1".to_string(),
            time_s: (0..n as i64).map(|i| i * 900).collect(),
            values: (0..n).map(|i| i as f64).collect(),
        }
    }

    #[test]
    fn fifteen_min_is_identity() {
        let s = series_of(8);
        let out = resample(&s, Cadence::FifteenMin, 4).unwrap();
        assert_eq!(out, s);
    }

    #[test]
    fn one_hour_keeps_every_fourth_sample() {
        let s = series_of(8);
        let out = resample(&s, Cadence::OneHour, 4).unwrap();
        assert_eq!(out.values, vec![0.0, 4.0]);
        assert_eq!(out.time_s, vec![0, 3_600]);
    }

    #[test]
    fn one_hour_on_trimmed_series() {
        // 7 samples left after the closing-boundary drop: positions 0 and 4
        let s = series_of(7);
        let out = resample(&s, Cadence::OneHour, 4).unwrap();
        assert_eq!(out.len(), 2);
        assert_eq!(out.values, vec![0.0, 4.0]);
    }

    #[test]
    fn zero_samples_per_cadence_is_rejected() {
        let s = series_of(4);
        assert!(matches!(
            resample(&s, Cadence::OneHour, 0),
            Err(SeriesError::Core(CoreError::InvalidSampleCount { value: 0 }))
        ));
    }
}
