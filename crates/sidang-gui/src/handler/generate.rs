//! The generate button and its result.

use std::path::PathBuf;

use iced::Task;

use crate::error::GuiError;
use crate::message::Message;
use crate::service::{GenerationJob, run_job};
use crate::state::{AppState, ModalState};

/// Validate and start generation. Problems open a modal and nothing is
/// written.
pub fn handle_generate(state: &mut AppState) -> Task<Message> {
    if state.is_busy {
        return Task::none();
    }

    let directory = state.faculty.as_ref().map(|f| f.directory.as_ref());
    match GenerationJob::prepare(&state.form, directory, &state.settings) {
        Ok(job) => {
            state.is_busy = true;
            state.status = "Status: membuat dokumen ...".to_string();
            Task::perform(run_job(job), Message::Generated)
        }
        Err(err) => {
            state.show_error(&err);
            Task::none()
        }
    }
}

/// Show the written paths, or the failure.
pub fn handle_generated(
    state: &mut AppState,
    result: Result<Vec<PathBuf>, GuiError>,
) -> Task<Message> {
    state.is_busy = false;
    match result {
        Ok(paths) => {
            let listing = paths
                .iter()
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join("\n");
            state.status = match paths.first().and_then(|p| p.parent()) {
                Some(folder) => format!("Status: sukses → {}", folder.display()),
                None => "Status: sukses".to_string(),
            };
            state.modal = Some(ModalState::success(format!(
                "Dokumen berhasil dibuat:\n{listing}"
            )));
        }
        Err(err) => {
            state.status = format!("Status: gagal → {err}");
            state.show_error(&err);
        }
    }
    Task::none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::component::ModalTone;
    use crate::state::{FormState, Settings};

    fn state() -> AppState {
        let today = NaiveDate::from_ymd_opt(2025, 3, 5).unwrap();
        AppState::with_settings(Settings::default(), FormState::new(today))
    }

    #[test]
    fn test_generate_without_spreadsheet() {
        let mut state = state();
        let _ = handle_generate(&mut state);
        let modal = state.modal.expect("modal shown");
        assert_eq!(modal.tone, ModalTone::Warning);
        assert_eq!(modal.message, "Excel dosen belum diload / tidak ditemukan.");
        assert!(!state.is_busy);
    }

    #[test]
    fn test_generated_success_lists_paths() {
        let mut state = state();
        state.is_busy = true;
        let _ = handle_generated(
            &mut state,
            Ok(vec![
                PathBuf::from("out/Budi_1/a.docx"),
                PathBuf::from("out/Budi_1/b.docx"),
            ]),
        );
        assert!(!state.is_busy);
        let modal = state.modal.expect("modal shown");
        assert_eq!(modal.title, "Sukses");
        assert!(modal.message.contains("a.docx"));
        assert!(modal.message.contains("b.docx"));
        assert!(state.status.contains("Budi_1"));
    }
}
