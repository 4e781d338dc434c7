//! Optional legacy-format re-save.
//!
//! Some deployments need the workbook re-saved through Excel into the
//! legacy binary format (FileFormat 56). That capability only exists on
//! Windows with Excel installed; everywhere else `detect` returns `None`
//! and the step is a normal no-op. Failure never touches the primary
//! workbook.

use std::path::Path;

use crate::WorkbookResult;

/// A backend able to re-save an already-written workbook into the legacy
/// binary format.
pub trait LegacyReformat {
    fn label(&self) -> &'static str;
    fn reformat(&self, path: &Path) -> WorkbookResult<()>;
}

/// Probe the platform for a usable re-save backend.
pub fn detect() -> Option<Box<dyn LegacyReformat>> {
    #[cfg(windows)]
    {
        Some(Box::new(ExcelAutomation))
    }
    #[cfg(not(windows))]
    {
        None
    }
}

/// Run the re-save if a backend exists, downgrading any failure to a
/// warning. The primary XLSX stays valid either way.
pub fn reformat_best_effort(path: &Path) {
    match detect() {
        Some(backend) => {
            if let Err(err) = backend.reformat(path) {
                tracing::warn!(
                    path = %path.display(),
                    backend = backend.label(),
                    error = %err,
                    "legacy re-save skipped; primary workbook remains valid"
                );
            }
        }
        None => {
            tracing::debug!(path = %path.display(), "no legacy re-save backend on this platform");
        }
    }
}

#[cfg(windows)]
struct ExcelAutomation;

#[cfg(windows)]
impl LegacyReformat for ExcelAutomation {
    fn label(&self) -> &'static str {
        "excel-com"
    }

    fn reformat(&self, path: &Path) -> WorkbookResult<()> {
        use crate::WorkbookError;

        // FileFormat 56 is the legacy binary workbook (xlExcel8).
        let script = format!(
            "$xl = New-Object -ComObject Excel.Application; \
             $xl.DisplayAlerts = $false; \
             $wb = $xl.Workbooks.Open('{path}'); \
             $wb.SaveAs('{path}', 56); \
             $wb.Close($false); \
             $xl.Quit()",
            path = path.display()
        );
        let status = std::process::Command::new("powershell")
            .args(["-NoProfile", "-NonInteractive", "-Command", &script])
            .status()
            .map_err(|err| WorkbookError::ReformatUnavailable {
                reason: format!("cannot start powershell: {err}"),
            })?;
        if !status.success() {
            return Err(WorkbookError::ReformatUnavailable {
                reason: format!("excel automation exited with {status}"),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(not(windows))]
    fn absence_of_a_backend_is_a_no_op() {
        assert!(detect().is_none());
        // must not panic or touch the filesystem
        reformat_best_effort(Path::new("/nonexistent/out.xlsx"));
    }
}
