//! Form data collected for a single generate action.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::document::AdvisorCount;

/// All fields of the defense form.
///
/// Built fresh on every generate action, validated as a whole and dropped
/// after rendering. Faculty fields hold the selected member's name; an empty
/// string means nothing was selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub student_name: String,
    /// Student registration number (NPM).
    pub student_number: String,
    pub thesis_title: String,
    /// Exam sitting number, rendered as an ordinal word.
    pub attempt: u32,
    pub exam_date: NaiveDate,
    /// Indonesian weekday name derived from `exam_date`.
    pub weekday: String,
    /// Raw `HH:mm` strings as entered.
    pub start_time: String,
    pub end_time: String,
    pub advisor_1: String,
    pub advisor_2: String,
    /// Chair of the examination committee.
    pub reviewer_1: String,
    /// Secretary of the examination committee.
    pub reviewer_2: String,
}

impl FormData {
    /// `Two` when a second advisor is selected, otherwise `One`.
    pub fn advisor_count(&self) -> AdvisorCount {
        if self.advisor_2.trim().is_empty() {
            AdvisorCount::One
        } else {
            AdvisorCount::Two
        }
    }
}

/// Inputs that only the memo (Nota Dinas) needs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemoDetails {
    /// Memo reference number (ID ND).
    pub memo_id: String,
    pub exam_location: String,
    /// Study program (prodi).
    pub study_program: String,
}
