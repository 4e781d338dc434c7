//! Error types for the fp-app service layer.

/// Application error type that wraps errors from the backend crates and
/// presents a unified interface to frontends.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Project(String),

    #[error("Series error: {0}")]
    Series(String),

    #[error("Table assembly error: {0}")]
    Tables(String),

    #[error("Workbook error: {0}")]
    Workbook(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for fp-app operations.
pub type AppResult<T> = Result<T, AppError>;

// Conversions from backend error types
impl From<fp_project::ProjectError> for AppError {
    fn from(err: fp_project::ProjectError) -> Self {
        AppError::Project(err.to_string())
    }
}

impl From<fp_series::SeriesError> for AppError {
    fn from(err: fp_series::SeriesError) -> Self {
        AppError::Series(err.to_string())
    }
}

impl From<fp_tables::TablesError> for AppError {
    fn from(err: fp_tables::TablesError) -> Self {
        AppError::Tables(err.to_string())
    }
}

impl From<fp_workbook::WorkbookError> for AppError {
    fn from(err: fp_workbook::WorkbookError) -> Self {
        AppError::Workbook(err.to_string())
    }
}

impl From<fp_core::CoreError> for AppError {
    fn from(err: fp_core::CoreError) -> Self {
        AppError::InvalidInput(err.to_string())
    }
}
