//! Form field messages.

use crate::state::FacultyRole;

#[derive(Debug, Clone)]
pub enum FormMessage {
    StudentNameChanged(String),
    StudentNumberChanged(String),
    ThesisTitleChanged(String),
    /// Minus/plus buttons
    AttemptChanged(u32),
    /// Attempt field text as typed
    AttemptInput(String),

    ExamDateChanged(String),
    /// Step the exam date by a number of days
    ShiftDate(i64),
    /// Reset the exam date to today
    Today,
    StartTimeChanged(String),
    EndTimeChanged(String),

    FacultySelected(FacultyRole, String),
    FacultyCleared(FacultyRole),

    MemoIdChanged(String),
    ExamLocationChanged(String),
    StudyProgramChanged(String),
}
