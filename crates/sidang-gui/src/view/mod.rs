//! View functions.
//!
//! Views are pure: they read [`AppState`] and return elements. All changes
//! go through messages.

mod actions;
mod form;

use iced::widget::{Space, column, container, rule, scrollable, text};
use iced::{Element, Length};

use crate::component::modal;
use crate::message::Message;
use crate::state::AppState;
use crate::theme::{FORM_MAX_WIDTH, GRAY_600, GRAY_900, SPACING_LG, SPACING_MD, SPACING_SM};

pub use actions::view_actions;
pub use form::{view_faculty, view_memo, view_schedule, view_student};

/// The main window.
pub fn view_main(state: &AppState) -> Element<'_, Message> {
    let header = column![
        text("Generate Berita Acara dan Nilai Ujian Skripsi (S1)")
            .size(20)
            .color(GRAY_900),
        text("Pilih dosen dari Excel → isi form → generate .docx ke output/Nama_NPM/")
            .size(13)
            .color(GRAY_600),
    ]
    .spacing(SPACING_SM);

    let body = column![
        header,
        rule::horizontal(1),
        view_student(&state.form),
        view_schedule(&state.form),
        view_faculty(state),
        view_memo(&state.form),
        view_actions(state),
        Space::new().height(SPACING_MD),
    ]
    .spacing(SPACING_MD)
    .max_width(FORM_MAX_WIDTH);

    let page: Element<'_, Message> = scrollable(
        container(body)
            .padding(SPACING_LG)
            .width(Length::Fill)
            .center_x(Length::Fill),
    )
    .height(Length::Fill)
    .into();

    match &state.modal {
        Some(notice) => modal(
            page,
            notice.tone,
            &notice.title,
            &notice.message,
            Message::DismissModal,
        ),
        None => page,
    }
}
