//! Form field edits.

use chrono::Local;
use iced::Task;

use super::MessageHandler;
use crate::message::{FormMessage, Message};
use crate::state::AppState;
use crate::state::form::DATE_FORMAT;

pub struct FormHandler;

impl MessageHandler<FormMessage> for FormHandler {
    fn handle(&self, state: &mut AppState, msg: FormMessage) -> Task<Message> {
        let form = &mut state.form;
        match msg {
            FormMessage::StudentNameChanged(value) => form.student_name = value,
            FormMessage::StudentNumberChanged(value) => form.student_number = value,
            FormMessage::ThesisTitleChanged(value) => form.thesis_title = value,
            FormMessage::AttemptChanged(value) => form.set_attempt(value),
            FormMessage::AttemptInput(raw) => form.set_attempt_input(raw),

            FormMessage::ExamDateChanged(value) => form.exam_date = value,
            FormMessage::ShiftDate(days) => form.shift_date(days),
            FormMessage::Today => {
                form.exam_date = Local::now().date_naive().format(DATE_FORMAT).to_string();
            }
            FormMessage::StartTimeChanged(value) => form.start_time = value,
            FormMessage::EndTimeChanged(value) => form.end_time = value,

            FormMessage::FacultySelected(role, label) => form.set_selection(role, Some(label)),
            FormMessage::FacultyCleared(role) => form.set_selection(role, None),

            FormMessage::MemoIdChanged(value) => form.memo_id = value,
            FormMessage::ExamLocationChanged(value) => form.exam_location = value,
            FormMessage::StudyProgramChanged(value) => form.study_program = value,
        }
        Task::none()
    }
}
