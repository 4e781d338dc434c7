//! Shared application service layer for favorprep.
//!
//! Composes extraction, resampling, table assembly and workbook writing
//! into the single entry point used by the CLI.

pub mod create_service;
pub mod error;

// Re-export key types for convenience
pub use create_service::{build_workbook, create};
pub use error::{AppError, AppResult};
