//! Form sections.

use iced::widget::{button, column, combo_box, row, text, text_input};
use iced::{Alignment, Element, Length};
use iced_fonts::lucide;

use sidang_model::TimeOfDay;

use crate::component::{SectionCard, form_field, labeled, stepper_field};
use crate::message::{FormMessage, Message};
use crate::state::form::ATTEMPT_RANGE;
use crate::state::{AppState, FacultyRole, FormState};
use crate::theme::style::text_input_error;
use crate::theme::{
    GRAY_500, PRIMARY_500, SPACING_MD, SPACING_SM, SPACING_XS, button_ghost, text_input_default,
};

fn form_msg(f: impl Fn(String) -> FormMessage) -> impl Fn(String) -> Message {
    move |value| Message::Form(f(value))
}

fn two_columns<'a>(
    left: Element<'a, Message>,
    right: Element<'a, Message>,
) -> Element<'a, Message> {
    row![left, right].spacing(SPACING_MD).into()
}

/// Nama, NPM, judul, ujian ke-.
pub fn view_student(form: &FormState) -> Element<'_, Message> {
    let content = column![
        two_columns(
            form_field(
                "Nama Mahasiswa",
                &form.student_name,
                "Nama lengkap",
                form_msg(FormMessage::StudentNameChanged),
                false,
            ),
            form_field(
                "NPM",
                &form.student_number,
                "Nomor pokok mahasiswa",
                form_msg(FormMessage::StudentNumberChanged),
                false,
            ),
        ),
        form_field(
            "Judul Skripsi",
            &form.thesis_title,
            "Judul skripsi",
            form_msg(FormMessage::ThesisTitleChanged),
            false,
        ),
        stepper_field(
            "Ujian ke-",
            &form.attempt_input,
            form.attempt,
            ATTEMPT_RANGE,
            form_msg(FormMessage::AttemptInput),
            |n| Message::Form(FormMessage::AttemptChanged(n)),
        ),
    ]
    .spacing(SPACING_SM);

    SectionCard::new("Data Mahasiswa", content)
        .icon(lucide::user().size(16).color(PRIMARY_500))
        .view()
}

fn time_invalid(raw: &str) -> bool {
    !raw.trim().is_empty() && TimeOfDay::parse(raw).is_err()
}

/// Tanggal (hari derived), jam mulai, jam selesai.
pub fn view_schedule(form: &FormState) -> Element<'_, Message> {
    let date_invalid = form.parsed_date().is_none();

    let date_input = text_input("DD/MM/YYYY", &form.exam_date)
        .on_input(form_msg(FormMessage::ExamDateChanged))
        .padding(10.0)
        .width(Length::Fill)
        .style(if date_invalid {
            text_input_error
        } else {
            text_input_default
        });

    let step = |icon: iced::widget::Text<'static>, days: i64| {
        button(icon.size(16))
            .padding([6.0, 8.0])
            .style(button_ghost)
            .on_press_maybe((!date_invalid).then_some(Message::Form(FormMessage::ShiftDate(days))))
    };

    let date_row = row![
        step(lucide::chevron_left(), -1),
        date_input,
        step(lucide::chevron_right(), 1),
        button(lucide::calendar_days().size(16))
            .padding([6.0, 8.0])
            .style(button_ghost)
            .on_press(Message::Form(FormMessage::Today)),
    ]
    .spacing(SPACING_XS)
    .align_y(Alignment::Center);

    let weekday = text_input("otomatis dari tanggal", form.weekday())
        .padding(10.0)
        .width(Length::Fill)
        .style(text_input_default);

    let content = column![
        two_columns(
            labeled("Tanggal", date_row),
            labeled("Hari (auto)", weekday),
        ),
        two_columns(
            form_field(
                "Jam Mulai",
                &form.start_time,
                "HH:mm",
                form_msg(FormMessage::StartTimeChanged),
                time_invalid(&form.start_time),
            ),
            form_field(
                "Jam Selesai",
                &form.end_time,
                "HH:mm",
                form_msg(FormMessage::EndTimeChanged),
                time_invalid(&form.end_time),
            ),
        ),
    ]
    .spacing(SPACING_SM);

    SectionCard::new("Waktu Ujian", content)
        .icon(lucide::calendar().size(16).color(PRIMARY_500))
        .view()
}

fn faculty_picker(state: &AppState, role: FacultyRole) -> Element<'_, Message> {
    let picker = combo_box(
        state.pickers.get(role),
        role.placeholder(),
        state.form.selection(role),
        move |label| Message::Form(FormMessage::FacultySelected(role, label)),
    )
    .padding(10.0)
    .width(Length::Fill);

    let clear = button(lucide::x().size(14).color(GRAY_500))
        .padding([6.0, 8.0])
        .style(button_ghost)
        .on_press_maybe(
            state
                .form
                .selection(role)
                .map(|_| Message::Form(FormMessage::FacultyCleared(role))),
        );

    labeled(
        role.label(),
        row![picker, clear]
            .spacing(SPACING_XS)
            .align_y(Alignment::Center),
    )
}

/// The four searchable faculty pickers.
pub fn view_faculty(state: &AppState) -> Element<'_, Message> {
    let count = state
        .faculty
        .as_ref()
        .map_or(0, |loaded| loaded.directory.len());

    let content = column![
        two_columns(
            faculty_picker(state, FacultyRole::Advisor1),
            faculty_picker(state, FacultyRole::Advisor2),
        ),
        two_columns(
            faculty_picker(state, FacultyRole::Reviewer1),
            faculty_picker(state, FacultyRole::Reviewer2),
        ),
        text(format!("{count} dosen tersedia")).size(12).color(GRAY_500),
    ]
    .spacing(SPACING_SM);

    SectionCard::new("Dosen", content)
        .icon(lucide::users().size(16).color(PRIMARY_500))
        .view()
}

/// Memo (Nota Dinas) inputs.
pub fn view_memo(form: &FormState) -> Element<'_, Message> {
    let content = column![
        form_field(
            "ID ND",
            &form.memo_id,
            "Nomor nota dinas",
            form_msg(FormMessage::MemoIdChanged),
            false,
        ),
        two_columns(
            form_field(
                "Lokasi Ujian",
                &form.exam_location,
                "Ruang ujian",
                form_msg(FormMessage::ExamLocationChanged),
                false,
            ),
            form_field(
                "Prodi",
                &form.study_program,
                "Program studi",
                form_msg(FormMessage::StudyProgramChanged),
                false,
            ),
        ),
    ]
    .spacing(SPACING_SM);

    SectionCard::new("Nota Dinas", content)
        .icon(lucide::file_text().size(16).color(PRIMARY_500))
        .view()
}
