//! The assembler writes the marker, the recovery reads it: the two sides
//! of the marker-column contract must agree end to end.

use fp_series::Series;
use fp_tables::*;

#[test]
fn single_setpoint_survives_the_round_trip() {
    let setpoints = coerce_setpoints(Some(&serde_yaml::from_str("[10.5]").unwrap()))
        .unwrap()
        .unwrap();
    let inlets = inlets_table("J1", &IdMap::default(), "V1", Some(&setpoints));
    assert_eq!(inlets.cell(0, 3), Some(&Cell::Float(10.5)));

    // Inlet pressure is held at the setpoint, so the raw series carries it
    // at the cadence boundary. 5 raw samples -> 4 rows, one marked row.
    let series = Series {
        id: "J1".to_string(),
        time_s: vec![0, 900, 1_800, 2_700, 3_600],
        values: vec![10.5, 10.9, 11.1, 10.8, 10.7],
    };
    let pressures = pressures_table(&[series], 4, &IdMap::default()).unwrap();
    assert_eq!(pressures.n_rows(), 4);

    let recovered = read_pressure_setpoints(&pressures).unwrap();
    assert_eq!(recovered, setpoints);
}

#[test]
fn recovery_returns_one_value_per_marked_row() {
    // 9 raw samples -> 8 rows, markers at rows 0 and 4.
    let series = Series {
        id: "J1".to_string(),
        time_s: (0..9).map(|i| i * 900).collect(),
        values: vec![10.5, 11.0, 11.2, 11.1, 12.0, 12.1, 12.3, 12.2, 12.4],
    };
    let pressures = pressures_table(&[series], 4, &IdMap::default()).unwrap();
    let recovered = read_pressure_setpoints(&pressures).unwrap();
    assert_eq!(recovered, vec![10.5, 12.0]);
}
