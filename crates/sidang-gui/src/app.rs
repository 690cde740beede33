//! Main application.
//!
//! Elm architecture: State → Message → Update → View. All state changes
//! happen in [`App::update`]; background work is started with
//! `Task::perform`.

use chrono::Local;
use iced::{Element, Task, Theme};

use crate::handler::{
    FormHandler, MessageHandler, ResourceHandler, handle_generate, handle_generated,
};
use crate::message::Message;
use crate::service::load_directory_task;
use crate::state::{
    AppState, FormState, Settings, missing_templates, missing_templates_status,
};
use crate::theme::app_theme;
use crate::view::view_main;

/// Root of the application.
pub struct App {
    pub state: AppState,
}

impl App {
    /// Load settings and start loading the faculty spreadsheet when one is
    /// found.
    pub fn new() -> (Self, Task<Message>) {
        let settings = Settings::load();
        let spreadsheet = settings.spreadsheet();
        let form = FormState::new(Local::now().date_naive());

        let mut app = Self {
            state: AppState::with_settings(settings, form),
        };

        let startup = if spreadsheet.is_file() {
            app.state.is_busy = true;
            load_directory_task(spreadsheet, true)
        } else {
            tracing::info!("No spreadsheet at {}", spreadsheet.display());
            Task::none()
        };

        let missing = missing_templates(&app.state.settings);
        if !missing.is_empty() {
            tracing::warn!("Missing templates: {:?}", missing);
            app.state.status = missing_templates_status(&app.state.settings, missing.len());
        }

        (app, startup)
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Form(msg) => FormHandler.handle(&mut self.state, msg),

            Message::Resources(msg) => ResourceHandler.handle(&mut self.state, msg),

            Message::Generate => handle_generate(&mut self.state),

            Message::Generated(result) => handle_generated(&mut self.state, result),

            Message::DismissModal => {
                self.state.modal = None;
                Task::none()
            }

            Message::Noop => Task::none(),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view_main(&self.state)
    }

    pub fn title(&self) -> String {
        "Berita Acara Ujian Skripsi".to_string()
    }

    pub fn theme(&self) -> Theme {
        app_theme()
    }
}
