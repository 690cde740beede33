//! Resource selection messages.

use std::path::PathBuf;
use std::sync::Arc;

use sidang_ingest::FacultyDirectory;

use crate::error::GuiError;

#[derive(Debug, Clone)]
pub enum ResourceMessage {
    /// Open the spreadsheet file dialog
    PickSpreadsheet,
    SpreadsheetSelected(PathBuf),
    /// Background load finished. `startup` loads report to the status line
    /// instead of a modal.
    SpreadsheetLoaded {
        path: PathBuf,
        result: Result<Arc<FacultyDirectory>, GuiError>,
        startup: bool,
    },

    /// Open the template folder dialog
    PickTemplateDir,
    TemplateDirSelected(PathBuf),

    /// Open the output folder dialog
    PickOutputRoot,
    OutputRootSelected(PathBuf),
}
