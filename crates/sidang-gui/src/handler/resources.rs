//! Spreadsheet, template folder and output folder selection.

use std::path::PathBuf;

use iced::Task;

use super::MessageHandler;
use crate::message::{Message, ResourceMessage};
use crate::paths;
use crate::service::load_directory_task;
use crate::state::{AppState, LoadedDirectory, missing_templates, missing_templates_status};

pub struct ResourceHandler;

impl MessageHandler<ResourceMessage> for ResourceHandler {
    fn handle(&self, state: &mut AppState, msg: ResourceMessage) -> Task<Message> {
        match msg {
            ResourceMessage::PickSpreadsheet => Task::perform(
                async {
                    rfd::AsyncFileDialog::new()
                        .set_title("Pilih Excel Dosen")
                        .set_directory(paths::app_root())
                        .add_filter("Spreadsheet", &["xlsx", "xlsm", "xls", "ods", "csv"])
                        .pick_file()
                        .await
                        .map(|handle| handle.path().to_path_buf())
                },
                |path| match path {
                    Some(p) => Message::Resources(ResourceMessage::SpreadsheetSelected(p)),
                    None => Message::Noop,
                },
            ),

            ResourceMessage::SpreadsheetSelected(path) => {
                state.is_busy = true;
                state.status = format!("Status: memuat {} ...", file_name(&path));
                load_directory_task(path, false)
            }

            ResourceMessage::SpreadsheetLoaded {
                path,
                result,
                startup,
            } => {
                state.is_busy = false;
                match result {
                    Ok(directory) => {
                        tracing::info!(
                            "Loaded {} faculty members from {}",
                            directory.len(),
                            path.display()
                        );
                        let missing = missing_templates(&state.settings).len();
                        state.status = if !startup {
                            format!("Status: Excel dosen loaded: {}", file_name(&path))
                        } else if missing == 0 {
                            "Status: default Excel & template terdeteksi. Tinggal isi form dan Generate."
                                .to_string()
                        } else {
                            missing_templates_status(&state.settings, missing)
                        };
                        if !startup {
                            state.settings.paths.last_spreadsheet = Some(path.clone());
                            state.save_settings();
                        }
                        state.set_faculty(LoadedDirectory { path, directory });
                    }
                    Err(err) if startup => {
                        tracing::warn!("Default spreadsheet failed to load: {err}");
                        state.status =
                            format!("Status: default Excel ditemukan, tapi gagal load: {err}");
                    }
                    Err(err) => state.show_error(&err),
                }
                Task::none()
            }

            ResourceMessage::PickTemplateDir => {
                pick_folder("Pilih Folder Template", ResourceMessage::TemplateDirSelected)
            }

            ResourceMessage::TemplateDirSelected(path) => {
                state.status = format!("Status: folder template dipilih: {}", path.display());
                state.settings.paths.template_dir = Some(path);
                state.save_settings();
                Task::none()
            }

            ResourceMessage::PickOutputRoot => {
                pick_folder("Pilih Folder Output", ResourceMessage::OutputRootSelected)
            }

            ResourceMessage::OutputRootSelected(path) => {
                state.status = format!("Status: folder output dipilih: {}", path.display());
                state.settings.paths.output_root = Some(path);
                state.save_settings();
                Task::none()
            }
        }
    }
}

fn pick_folder(
    title: &'static str,
    on_pick: impl FnOnce(PathBuf) -> ResourceMessage + Send + 'static,
) -> Task<Message> {
    Task::perform(
        async move {
            rfd::AsyncFileDialog::new()
                .set_title(title)
                .set_directory(paths::app_root())
                .pick_folder()
                .await
                .map(|handle| handle.path().to_path_buf())
        },
        |path| match path {
            Some(p) => Message::Resources(on_pick(p)),
            None => Message::Noop,
        },
    )
}

fn file_name(path: &std::path::Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use chrono::NaiveDate;
    use sidang_ingest::FacultyDirectory;
    use sidang_model::{FacultyMember, IdKind};

    use crate::error::GuiError;
    use crate::state::{FormState, Settings};

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        AppState::with_settings(Settings::default(), FormState::new(today))
    }

    fn state_with_templates(dir: &std::path::Path, present: bool) -> AppState {
        let mut state = state();
        state.settings.paths.template_dir = Some(dir.to_path_buf());
        if present {
            for path in missing_templates(&state.settings) {
                std::fs::write(path, b"stub").unwrap();
            }
        }
        state
    }

    fn startup_loaded() -> ResourceMessage {
        let directory =
            FacultyDirectory::from_members([FacultyMember::new("Dr. A", IdKind::Nip, "1")]);
        ResourceMessage::SpreadsheetLoaded {
            path: PathBuf::from("resources/dosen.xlsx"),
            result: Ok(Arc::new(directory)),
            startup: true,
        }
    }

    #[test]
    fn test_startup_failure_goes_to_status_line() {
        let mut state = state();
        let _ = ResourceHandler.handle(
            &mut state,
            ResourceMessage::SpreadsheetLoaded {
                path: PathBuf::from("resources/dosen.xlsx"),
                result: Err(GuiError::SpreadsheetLoad {
                    reason: "Kolom Excel harus ada: nama, jenis_id, id".to_string(),
                }),
                startup: true,
            },
        );
        assert!(state.modal.is_none());
        assert!(state.status.contains("gagal load"));
        assert!(state.faculty.is_none());
    }

    #[test]
    fn test_startup_success_fills_pickers() {
        let mut state = state();
        let directory = FacultyDirectory::from_members([FacultyMember::new(
            "Dr. A",
            IdKind::Nip,
            "1",
        )]);
        let _ = ResourceHandler.handle(
            &mut state,
            ResourceMessage::SpreadsheetLoaded {
                path: PathBuf::from("resources/dosen.xlsx"),
                result: Ok(Arc::new(directory)),
                startup: true,
            },
        );
        assert!(state.modal.is_none());
        assert_eq!(state.faculty.as_ref().map(|f| f.directory.len()), Some(1));
        assert_eq!(state.settings.paths.last_spreadsheet, None);
    }

    #[test]
    fn test_startup_status_with_all_templates() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut state = state_with_templates(dir.path(), true);
        let _ = ResourceHandler.handle(&mut state, startup_loaded());
        assert!(state.status.contains("terdeteksi"));
    }

    #[test]
    fn test_startup_status_keeps_missing_templates_warning() {
        let dir = tempfile::TempDir::new().unwrap();
        let mut state = state_with_templates(dir.path(), false);
        let _ = ResourceHandler.handle(&mut state, startup_loaded());
        assert!(state.status.contains("4 template .docx belum ada"));
        assert!(!state.status.contains("terdeteksi"));
    }
}
