//! The create pipeline: extract, resample, assemble, write.

use std::path::Path;

use fp_core::{TimeWindow, hr_to_sec};
use fp_project::{Config, LoggerKind};
use fp_series::{ResultSet, extract, resample};
use fp_tables::{IdMap, LoggerRow, assemble, coerce_setpoints};
use fp_workbook::{
    SHEET_FLOWS, SHEET_INLETS, SHEET_LOGGERS, SHEET_NOTES, SHEET_PRESSURES, SHEET_TIMES,
    WorkbookSpec, reformat_best_effort, write_workbook,
};

use crate::error::AppResult;

/// Assemble every output table for one run.
///
/// Pressures keep every raw sample in the window (minus the closing
/// boundary); only flows are reduced to the declared cadence.
pub fn build_workbook(config: &Config, results: &ResultSet) -> AppResult<WorkbookSpec> {
    let sampling = &config.sampling;
    let window = TimeWindow::new(
        hr_to_sec(config.window.start_hr, 0),
        hr_to_sec(config.window.end_hr, 0),
    )?;
    let id_map: IdMap = config
        .id_map
        .iter()
        .map(|(internal, external)| (internal.clone(), external.clone()))
        .collect();

    let pressure_ids: Vec<String> = config
        .loggers
        .iter()
        .filter(|l| l.kind == LoggerKind::Pressure)
        .map(|l| l.network_id.clone())
        .collect();
    let pressure_series = extract::node_pressures(&pressure_ids, results, window)?;
    let pressures = assemble::pressures_table(
        &pressure_series,
        sampling.samples_per_cadence,
        &id_map,
    )?;

    let raw_flows = extract::inlet_flows(results, &config.inlet.link_id, window)?;
    let flows = resample(&raw_flows, sampling.cadence, sampling.samples_per_cadence)?;
    let flows = assemble::flows_table(
        id_map.to_external(&config.inlet.junction_id),
        &flows,
        sampling.cadence,
        sampling.samples_per_cadence,
    )?;

    let setpoints = coerce_setpoints(config.inlet.pressure_setpoints.as_ref())?;
    let inlets = assemble::inlets_table(
        &config.inlet.junction_id,
        &id_map,
        &config.inlet.valve_id,
        setpoints.as_deref(),
    );

    let logger_rows: Vec<LoggerRow> = config
        .loggers
        .iter()
        .map(|l| LoggerRow {
            logger_id: l.logger_id.clone(),
            network_id: l.network_id.clone(),
            kind: l.kind.as_str().to_string(),
        })
        .collect();

    let mut spec = WorkbookSpec::default();
    spec.push(SHEET_LOGGERS, true, assemble::loggers_table(&logger_rows));
    spec.push(SHEET_INLETS, true, inlets);
    spec.push(SHEET_PRESSURES, true, pressures);
    spec.push(SHEET_FLOWS, true, flows);
    spec.push(
        SHEET_TIMES,
        false,
        assemble::times_table(sampling.start_time_min, sampling.measurement_step_min),
    );
    spec.push(SHEET_NOTES, false, assemble::notes_table(&config.notes));
    Ok(spec)
}

/// Build and write one workbook, then run the optional legacy re-save.
pub fn create(config: &Config, results: &ResultSet, out_path: &Path) -> AppResult<()> {
    let spec = build_workbook(config, results)?;
    write_workbook(&spec, out_path)?;
    tracing::info!(path = %out_path.display(), sheets = spec.sheets.len(), "workbook written");
    reformat_best_effort(out_path);
    Ok(())
}
