//! Form state: raw field values as typed by the user.
//!
//! Nothing here is validated. [`FormState::to_form_data`] builds the
//! [`FormData`] record that the validator and the document generator see.

use chrono::{Datelike, Duration, NaiveDate};

use sidang_common::weekday_name;
use sidang_ingest::FacultyDirectory;
use sidang_model::{FacultyMember, FormData, MemoDetails};
use sidang_output::Participants;

use crate::error::GuiError;

/// Display format of the exam date field.
pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Lowest and highest exam attempt the stepper allows.
pub const ATTEMPT_RANGE: (u32, u32) = (1, 20);

/// The four faculty pickers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacultyRole {
    Advisor1,
    Advisor2,
    Reviewer1,
    Reviewer2,
}

impl FacultyRole {
    pub const ALL: [FacultyRole; 4] = [
        Self::Advisor1,
        Self::Advisor2,
        Self::Reviewer1,
        Self::Reviewer2,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Advisor1 => "Pembimbing 1",
            Self::Advisor2 => "Pembimbing 2",
            Self::Reviewer1 => "Penguji 1 (Ketua)",
            Self::Reviewer2 => "Penguji 2 (Sekretaris)",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            Self::Advisor1 => "Pilih Pembimbing 1 (wajib)",
            Self::Advisor2 => "Pilih Pembimbing 2 (opsional)",
            Self::Reviewer1 => "Pilih Penguji 1 / Ketua (wajib)",
            Self::Reviewer2 => "Pilih Penguji 2 / Sekretaris (wajib)",
        }
    }
}

/// Raw values of every form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    pub student_name: String,
    pub student_number: String,
    pub thesis_title: String,
    pub attempt: u32,
    /// Attempt field text as typed. May be empty while the user retypes.
    pub attempt_input: String,
    /// `DD/MM/YYYY` as typed.
    pub exam_date: String,
    pub start_time: String,
    pub end_time: String,
    /// Selected picker labels.
    pub advisor_1: Option<String>,
    pub advisor_2: Option<String>,
    pub reviewer_1: Option<String>,
    pub reviewer_2: Option<String>,
    pub memo_id: String,
    pub exam_location: String,
    pub study_program: String,
}

impl FormState {
    /// Empty form dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            student_name: String::new(),
            student_number: String::new(),
            thesis_title: String::new(),
            attempt: ATTEMPT_RANGE.0,
            attempt_input: ATTEMPT_RANGE.0.to_string(),
            exam_date: today.format(DATE_FORMAT).to_string(),
            start_time: "08:00".to_string(),
            end_time: "10:00".to_string(),
            advisor_1: None,
            advisor_2: None,
            reviewer_1: None,
            reviewer_2: None,
            memo_id: String::new(),
            exam_location: String::new(),
            study_program: String::new(),
        }
    }

    /// Parsed exam date. ISO `YYYY-MM-DD` is accepted as well.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.exam_date.trim();
        NaiveDate::parse_from_str(raw, DATE_FORMAT)
            .or_else(|_| NaiveDate::parse_from_str(raw, "%Y-%m-%d"))
            .ok()
    }

    /// Set the attempt, clamped to [`ATTEMPT_RANGE`].
    pub fn set_attempt(&mut self, value: u32) {
        self.attempt = value.clamp(ATTEMPT_RANGE.0, ATTEMPT_RANGE.1);
        self.attempt_input = self.attempt.to_string();
    }

    /// Apply typed attempt text. Empty text is kept as is and leaves the
    /// attempt unchanged; non-digits are rejected.
    pub fn set_attempt_input(&mut self, raw: String) {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            self.attempt_input = raw;
        } else if trimmed.chars().all(|c| c.is_ascii_digit()) {
            let parsed = trimmed.parse().unwrap_or(u32::MAX);
            self.set_attempt(parsed);
        }
    }

    /// Indonesian weekday of the exam date, or `""` while it does not parse.
    pub fn weekday(&self) -> &'static str {
        self.parsed_date().map_or("", |date| weekday_name(date.weekday()))
    }

    /// Move the exam date by `days`. Does nothing while the field is invalid.
    pub fn shift_date(&mut self, days: i64) {
        if let Some(date) = self
            .parsed_date()
            .and_then(|date| date.checked_add_signed(Duration::days(days)))
        {
            self.exam_date = date.format(DATE_FORMAT).to_string();
        }
    }

    pub fn selection(&self, role: FacultyRole) -> Option<&String> {
        match role {
            FacultyRole::Advisor1 => self.advisor_1.as_ref(),
            FacultyRole::Advisor2 => self.advisor_2.as_ref(),
            FacultyRole::Reviewer1 => self.reviewer_1.as_ref(),
            FacultyRole::Reviewer2 => self.reviewer_2.as_ref(),
        }
    }

    pub fn set_selection(&mut self, role: FacultyRole, label: Option<String>) {
        let slot = match role {
            FacultyRole::Advisor1 => &mut self.advisor_1,
            FacultyRole::Advisor2 => &mut self.advisor_2,
            FacultyRole::Reviewer1 => &mut self.reviewer_1,
            FacultyRole::Reviewer2 => &mut self.reviewer_2,
        };
        *slot = label.filter(|l| !l.trim().is_empty());
    }

    /// Drop selections whose label is not in `labels` (after a reload).
    pub fn retain_selections(&mut self, labels: &[String]) {
        for role in FacultyRole::ALL {
            let keep = self
                .selection(role)
                .is_some_and(|label| labels.binary_search(label).is_ok());
            if !keep {
                self.set_selection(role, None);
            }
        }
    }

    fn member<'a>(
        &self,
        role: FacultyRole,
        directory: &'a FacultyDirectory,
    ) -> Option<&'a FacultyMember> {
        self.selection(role).and_then(|label| directory.resolve(label))
    }

    /// Members behind the four pickers.
    pub fn participants<'a>(&self, directory: &'a FacultyDirectory) -> Participants<'a> {
        Participants {
            advisor_1: self.member(FacultyRole::Advisor1, directory),
            advisor_2: self.member(FacultyRole::Advisor2, directory),
            reviewer_1: self.member(FacultyRole::Reviewer1, directory),
            reviewer_2: self.member(FacultyRole::Reviewer2, directory),
        }
    }

    /// Build the record the validator checks. Faculty fields carry member
    /// names; an unresolved picker gives `""`.
    pub fn to_form_data(&self, directory: &FacultyDirectory) -> Result<FormData, GuiError> {
        let exam_date = self.parsed_date().ok_or_else(|| {
            GuiError::invalid_input("Tanggal ujian harus berformat DD/MM/YYYY.")
        })?;

        let people = self.participants(directory);
        let name = |member: Option<&FacultyMember>| {
            member.map(|m| m.name.clone()).unwrap_or_default()
        };

        Ok(FormData {
            student_name: self.student_name.trim().to_string(),
            student_number: self.student_number.trim().to_string(),
            thesis_title: self.thesis_title.trim().to_string(),
            attempt: self.attempt,
            exam_date,
            weekday: weekday_name(exam_date.weekday()).to_string(),
            start_time: self.start_time.trim().to_string(),
            end_time: self.end_time.trim().to_string(),
            advisor_1: name(people.advisor_1),
            advisor_2: name(people.advisor_2),
            reviewer_1: name(people.reviewer_1),
            reviewer_2: name(people.reviewer_2),
        })
    }

    pub fn memo(&self) -> MemoDetails {
        MemoDetails {
            memo_id: self.memo_id.trim().to_string(),
            exam_location: self.exam_location.trim().to_string(),
            study_program: self.study_program.trim().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sidang_model::IdKind;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 5).unwrap()
    }

    fn directory() -> FacultyDirectory {
        FacultyDirectory::from_members([
            FacultyMember::new("Dr. A", IdKind::Nip, "1"),
            FacultyMember::new("Dr. B", IdKind::Nup, "2"),
        ])
    }

    #[test]
    fn test_attempt_input_can_be_cleared_and_retyped() {
        let mut form = FormState::new(today());
        form.set_attempt(3);

        form.set_attempt_input(String::new());
        assert_eq!(form.attempt_input, "");
        assert_eq!(form.attempt, 3);

        form.set_attempt_input("7".to_string());
        assert_eq!(form.attempt_input, "7");
        assert_eq!(form.attempt, 7);

        form.set_attempt_input("7a".to_string());
        assert_eq!(form.attempt_input, "7");

        form.set_attempt_input("99".to_string());
        assert_eq!(form.attempt, 20);
        assert_eq!(form.attempt_input, "20");
    }

    #[test]
    fn test_date_and_weekday() {
        let mut form = FormState::new(today());
        assert_eq!(form.exam_date, "05/03/2025");
        assert_eq!(form.weekday(), "Rabu");

        form.shift_date(2);
        assert_eq!(form.exam_date, "07/03/2025");
        assert_eq!(form.weekday(), "Jumat");

        form.exam_date = "2025-08-17".to_string();
        assert_eq!(form.weekday(), "Minggu");

        form.exam_date = "31/02/2025".to_string();
        assert_eq!(form.weekday(), "");
        form.shift_date(1);
        assert_eq!(form.exam_date, "31/02/2025");
    }

    #[test]
    fn test_selections_follow_reload() {
        let dir = directory();
        let labels = dir.display_labels();
        let mut form = FormState::new(today());
        form.set_selection(FacultyRole::Advisor1, Some(labels[0].clone()));
        form.set_selection(FacultyRole::Reviewer1, Some("Dr. Z — NIP: 9".to_string()));
        form.set_selection(FacultyRole::Reviewer2, Some("  ".to_string()));
        assert_eq!(form.reviewer_2, None);

        form.retain_selections(&labels);
        assert_eq!(form.advisor_1.as_ref(), Some(&labels[0]));
        assert_eq!(form.reviewer_1, None);
    }

    #[test]
    fn test_to_form_data_resolves_names() {
        let dir = directory();
        let mut form = FormState::new(today());
        form.student_name = " Budi ".to_string();
        form.set_selection(FacultyRole::Advisor1, Some("Dr. A — NIP: 1".to_string()));
        form.set_selection(FacultyRole::Reviewer1, Some("Dr. B — NUP: 2".to_string()));

        let data = form.to_form_data(&dir).unwrap();
        assert_eq!(data.student_name, "Budi");
        assert_eq!(data.weekday, "Rabu");
        assert_eq!(data.advisor_1, "Dr. A");
        assert_eq!(data.advisor_2, "");
        assert_eq!(data.reviewer_1, "Dr. B");

        let people = form.participants(&dir);
        assert_eq!(people.reviewer_1.map(|m| m.id_number.as_str()), Some("2"));
        assert!(people.reviewer_2.is_none());
    }

    #[test]
    fn test_invalid_date_is_reported() {
        let mut form = FormState::new(today());
        form.exam_date = "besok".to_string();
        let err = form.to_form_data(&directory()).unwrap_err();
        assert_eq!(err.title(), "Input belum valid");
    }
}
