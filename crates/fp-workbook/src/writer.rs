//! Workbook serialization.
//!
//! Sheet names and order are consumed by the downstream tool and must not
//! change. The write is atomic from the caller's point of view: the
//! workbook is serialized to a sibling temporary file and renamed over the
//! destination, so a failed write leaves the destination in its prior
//! state.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

use fp_tables::{Cell, Table};
use rust_xlsxwriter::{Workbook, Worksheet, XlsxError};

use crate::{WorkbookError, WorkbookResult};

pub const SHEET_LOGGERS: &str = "loggers";
pub const SHEET_INLETS: &str = "inlets";
pub const SHEET_PRESSURES: &str = "pressure_measurements";
pub const SHEET_FLOWS: &str = "flow_measurements";
pub const SHEET_TIMES: &str = "times";
pub const SHEET_NOTES: &str = "notes";

/// One sheet of the output workbook. `times` and `notes` are headerless.
#[derive(Debug, Clone)]
pub struct Sheet {
    pub name: String,
    pub header: bool,
    pub table: Table,
}

/// The ordered sheets of one output workbook.
#[derive(Debug, Clone, Default)]
pub struct WorkbookSpec {
    pub sheets: Vec<Sheet>,
}

impl WorkbookSpec {
    pub fn push(&mut self, name: &str, header: bool, table: Table) {
        self.sheets.push(Sheet {
            name: name.to_string(),
            header,
            table,
        });
    }
}

/// Write the workbook atomically to `path`.
pub fn write_workbook(spec: &WorkbookSpec, path: &Path) -> WorkbookResult<()> {
    let tmp = temp_path(path);
    if let Err(err) = write_to(spec, &tmp) {
        let _ = fs::remove_file(&tmp);
        return Err(err);
    }
    fs::rename(&tmp, path).map_err(|source| {
        let _ = fs::remove_file(&tmp);
        WorkbookError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Sibling temporary path, same directory, so the final rename never
/// crosses a filesystem boundary.
fn temp_path(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("workbook.xlsx"));
    name.push(".tmp");
    path.with_file_name(name)
}

fn write_to(spec: &WorkbookSpec, path: &Path) -> WorkbookResult<()> {
    let xlsx = |source: XlsxError| WorkbookError::Xlsx {
        path: path.to_path_buf(),
        source,
    };

    let mut workbook = Workbook::new();
    for sheet in &spec.sheets {
        let worksheet = workbook.add_worksheet();
        worksheet.set_name(sheet.name.as_str()).map_err(xlsx)?;
        write_table(worksheet, &sheet.table, sheet.header).map_err(xlsx)?;
    }
    workbook.save(path).map_err(xlsx)
}

fn write_table(worksheet: &mut Worksheet, table: &Table, header: bool) -> Result<(), XlsxError> {
    let offset: u32 = if header { 1 } else { 0 };
    for (c, column) in table.columns.iter().enumerate() {
        let col = c as u16;
        if header {
            worksheet.write_string(0, col, column.header.as_str())?;
        }
        for (r, cell) in column.cells.iter().enumerate() {
            let row = r as u32 + offset;
            match cell {
                Cell::Empty => {}
                Cell::Text(text) => {
                    worksheet.write_string(row, col, text.as_str())?;
                }
                Cell::Int(value) => {
                    worksheet.write_number(row, col, *value as f64)?;
                }
                Cell::Float(value) => {
                    worksheet.write_number(row, col, *value)?;
                }
            }
        }
    }
    Ok(())
}
