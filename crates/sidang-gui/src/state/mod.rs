//! Application state.
//!
//! - [`AppState`]: everything the window shows
//! - [`FormState`]: raw field values
//! - [`Settings`]: persisted paths

pub mod form;
pub mod settings;

use std::path::PathBuf;
use std::sync::Arc;

use iced::widget::combo_box;

use sidang_ingest::FacultyDirectory;

use crate::component::ModalTone;
use crate::error::GuiError;

pub use form::{FacultyRole, FormState};
pub use settings::{PathSettings, Settings};

/// Searchable option lists, one per faculty picker.
pub struct FacultyPickers {
    advisor_1: combo_box::State<String>,
    advisor_2: combo_box::State<String>,
    reviewer_1: combo_box::State<String>,
    reviewer_2: combo_box::State<String>,
}

impl FacultyPickers {
    pub fn new(labels: Vec<String>) -> Self {
        Self {
            advisor_1: combo_box::State::new(labels.clone()),
            advisor_2: combo_box::State::new(labels.clone()),
            reviewer_1: combo_box::State::new(labels.clone()),
            reviewer_2: combo_box::State::new(labels),
        }
    }

    pub fn get(&self, role: FacultyRole) -> &combo_box::State<String> {
        match role {
            FacultyRole::Advisor1 => &self.advisor_1,
            FacultyRole::Advisor2 => &self.advisor_2,
            FacultyRole::Reviewer1 => &self.reviewer_1,
            FacultyRole::Reviewer2 => &self.reviewer_2,
        }
    }
}

impl Default for FacultyPickers {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

/// A dialog waiting for the user to dismiss it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalState {
    pub tone: ModalTone,
    pub title: String,
    pub message: String,
}

impl ModalState {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            tone: ModalTone::Success,
            title: "Sukses".to_string(),
            message: message.into(),
        }
    }

    pub fn from_error(err: &GuiError) -> Self {
        Self {
            tone: if err.is_warning() {
                ModalTone::Warning
            } else {
                ModalTone::Error
            },
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// Templates expected in the configured folder but absent.
pub fn missing_templates(settings: &Settings) -> Vec<PathBuf> {
    sidang_output::TemplateSet::new(settings.template_dir()).missing()
}

/// Status line for a template folder with `count` templates missing.
pub fn missing_templates_status(settings: &Settings, count: usize) -> String {
    format!(
        "Status: {} template .docx belum ada di {}",
        count,
        settings.template_dir().display()
    )
}

/// Loaded faculty data with its source file.
#[derive(Debug, Clone)]
pub struct LoadedDirectory {
    pub path: PathBuf,
    pub directory: Arc<FacultyDirectory>,
}

/// All application state.
pub struct AppState {
    pub settings: Settings,
    pub form: FormState,
    pub faculty: Option<LoadedDirectory>,
    pub pickers: FacultyPickers,
    /// One-line status under the action buttons.
    pub status: String,
    pub modal: Option<ModalState>,
    /// A load or generate task is running.
    pub is_busy: bool,
}

impl AppState {
    pub fn with_settings(settings: Settings, form: FormState) -> Self {
        Self {
            settings,
            form,
            faculty: None,
            pickers: FacultyPickers::default(),
            status: "Status: siap. Load Excel & template (atau pakai default di resources/)."
                .to_string(),
            modal: None,
            is_busy: false,
        }
    }

    /// Install a freshly loaded directory, refreshing the pickers and
    /// keeping selections whose label still exists.
    pub fn set_faculty(&mut self, loaded: LoadedDirectory) {
        let labels = loaded.directory.display_labels();
        self.form.retain_selections(&labels);
        self.pickers = FacultyPickers::new(labels);
        self.faculty = Some(loaded);
    }

    pub fn show_error(&mut self, err: &GuiError) {
        tracing::warn!("{}: {}", err.title(), err);
        self.modal = Some(ModalState::from_error(err));
    }

    /// Persist settings, reporting failures in the status line only.
    pub fn save_settings(&mut self) {
        if let Err(err) = self.settings.save() {
            tracing::warn!("{err}");
            self.status = format!("Status: {err}");
        }
    }
}
