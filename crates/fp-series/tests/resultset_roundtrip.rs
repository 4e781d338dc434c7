use fp_series::*;

fn sample_records() -> Vec<StepRecord> {
    (0..4)
        .map(|i| StepRecord {
            time_s: i * 900,
            node_pressures: vec![
                NodePressure {
                    node_id: "J1".to_string(),
                    pressure_m: 30.0 + i as f64,
                },
                NodePressure {
                    node_id: "J2".to_string(),
                    pressure_m: 28.0 - i as f64,
                },
            ],
            link_flows: vec![LinkFlow {
                link_id: "P1".to_string(),
                flow_m3_s: 0.001 * i as f64,
            }],
        })
        .collect()
}

#[test]
fn save_and_load_jsonl() {
    let dir = std::env::temp_dir().join("fp_series_roundtrip");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("run.jsonl");

    let set = ResultSet::from_records(&sample_records()).unwrap();
    set.save_jsonl(&path).unwrap();

    let loaded = ResultSet::load_jsonl(&path).unwrap();
    assert_eq!(loaded.len(), 4);
    assert_eq!(loaded.time_s(), set.time_s());
    assert_eq!(
        loaded.node_pressures("J2").unwrap(),
        set.node_pressures("J2").unwrap()
    );
    assert_eq!(
        loaded.link_flows("P1").unwrap(),
        set.link_flows("P1").unwrap()
    );
}

#[test]
fn load_skips_blank_lines() {
    let dir = std::env::temp_dir().join("fp_series_blank_lines");
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("run.jsonl");

    let set = ResultSet::from_records(&sample_records()).unwrap();
    set.save_jsonl(&path).unwrap();

    let mut content = std::fs::read_to_string(&path).unwrap();
    content.push('\n');
    std::fs::write(&path, content).unwrap();

    let loaded = ResultSet::load_jsonl(&path).unwrap();
    assert_eq!(loaded.len(), 4);
}

#[test]
fn missing_file_is_an_io_error() {
    let path = std::env::temp_dir().join("fp_series_missing").join("no.jsonl");
    assert!(matches!(
        ResultSet::load_jsonl(&path),
        Err(SeriesError::Io(_))
    ));
}
