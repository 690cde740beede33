//! Faculty spreadsheet loading.

use std::path::PathBuf;
use std::sync::Arc;

use iced::Task;

use sidang_ingest::{FacultyDirectory, load_faculty_directory};

use crate::error::GuiError;
use crate::message::{Message, ResourceMessage};

/// Load the spreadsheet at `path` off the UI thread.
pub async fn load_directory(path: PathBuf) -> Result<Arc<FacultyDirectory>, GuiError> {
    tokio::task::spawn_blocking(move || {
        load_faculty_directory(&path)
            .map(Arc::new)
            .map_err(GuiError::from)
    })
    .await
    .map_err(|e| GuiError::internal(format!("Load task failed: {e}")))?
}

/// Task that loads `path` and reports back with
/// [`ResourceMessage::SpreadsheetLoaded`].
pub fn load_directory_task(path: PathBuf, startup: bool) -> Task<Message> {
    let target = path.clone();
    Task::perform(load_directory(target), move |result| {
        Message::Resources(ResourceMessage::SpreadsheetLoaded {
            path,
            result,
            startup,
        })
    })
}
