// fp-core/src/units.rs

use uom::si::f64::Time as UomTime;
use uom::si::time::{hour, minute, second};

// Public canonical unit type (SI, f64)
pub type Time = UomTime;

/// Exact m³/s → m³/h factor. A single multiply keeps the conversion exact
/// to one rounding; going through a rate quantity would divide by a
/// rounded reciprocal coefficient instead.
pub const M3S_TO_M3H: f64 = 3_600.0;

#[inline]
pub fn hours(v: f64) -> Time {
    Time::new::<hour>(v)
}

/// Convert a time in hours to simulation time in seconds.
/// `start_s` is the simulation start offset in seconds (usually 0).
pub fn hr_to_sec(time_hr: f64, start_s: i64) -> i64 {
    start_s + hours(time_hr).get::<second>().round() as i64
}

/// Convert a time in hours to minutes.
pub fn hr_to_min(time_hr: f64) -> f64 {
    hours(time_hr).get::<minute>()
}

/// Convert a flow from m³/s to m³/h.
///
/// The solver reports flows in m³/s; every table the downstream tool reads
/// is in m³/h. The conversion happens once, during flow extraction.
pub fn flow_m3s_to_m3h(v_m3s: f64) -> f64 {
    v_m3s * M3S_TO_M3H
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn hr_to_sec_whole_and_fractional_hours() {
        assert_eq!(hr_to_sec(0.0, 0), 0);
        assert_eq!(hr_to_sec(2.0, 0), 7_200);
        assert_eq!(hr_to_sec(1.75, 0), 6_300);
        assert_eq!(hr_to_sec(1.0, 3_600), 7_200);
    }

    #[test]
    fn hr_to_min_basics() {
        assert_eq!(hr_to_min(1.0), 60.0);
        assert_eq!(hr_to_min(0.25), 15.0);
    }

    #[test]
    fn flow_conversion_is_exact() {
        assert_eq!(flow_m3s_to_m3h(0.001), 3.6);
        assert_eq!(flow_m3s_to_m3h(0.0), 0.0);
    }

    proptest! {
        #[test]
        fn hr_to_sec_agrees_with_plain_arithmetic(hr in 0.0_f64..1.0e4) {
            prop_assert_eq!(hr_to_sec(hr, 0), (hr * 3_600.0).round() as i64);
        }
    }
}
