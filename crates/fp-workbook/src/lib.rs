//! fp-workbook: multi-sheet XLSX serialization for the downstream tool.

pub mod reformat;
pub mod writer;

pub use reformat::{LegacyReformat, detect, reformat_best_effort};
pub use writer::{
    SHEET_FLOWS, SHEET_INLETS, SHEET_LOGGERS, SHEET_NOTES, SHEET_PRESSURES, SHEET_TIMES, Sheet,
    WorkbookSpec, write_workbook,
};

use std::path::PathBuf;

pub type WorkbookResult<T> = Result<T, WorkbookError>;

#[derive(thiserror::Error, Debug)]
pub enum WorkbookError {
    #[error("I/O error writing workbook {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("XLSX serialization failed for {path}: {source}")]
    Xlsx {
        path: PathBuf,
        source: rust_xlsxwriter::XlsxError,
    },

    #[error("Legacy re-save unavailable: {reason}")]
    ReformatUnavailable { reason: String },
}
