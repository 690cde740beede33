//! Rule identifiers, messages and predicates.

use sidang_model::{FormData, MemoDetails, TimeOfDay};

/// Stable identifier for every validation rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleId {
    // Form: student
    StudentNameRequired,
    StudentNumberRequired,
    ThesisTitleRequired,
    WeekdayRequired,

    // Form: faculty
    PrimaryAdvisorRequired,
    ReviewersRequired,
    ReviewersDistinct,
    AdvisorsDistinct,

    // Form: time
    TimeFormat,
    EndAfterStart,

    // Memo
    MemoIdRequired,
    ExamLocationRequired,
    StudyProgramRequired,
}

impl RuleId {
    /// User-facing message shown when the rule fails.
    pub fn message(&self) -> &'static str {
        match self {
            Self::StudentNameRequired => "Nama mahasiswa wajib diisi.",
            Self::StudentNumberRequired => "NPM wajib diisi.",
            Self::ThesisTitleRequired => "Judul skripsi wajib diisi.",
            Self::WeekdayRequired => "Hari wajib terisi (auto dari tanggal, tapi jangan kosong).",
            Self::PrimaryAdvisorRequired => "Pembimbing 1 wajib dipilih.",
            Self::ReviewersRequired => "Penguji 1 dan Penguji 2 wajib dipilih.",
            Self::ReviewersDistinct => "Penguji 1 dan Penguji 2 tidak boleh orang yang sama.",
            Self::AdvisorsDistinct => "Pembimbing 2 tidak boleh sama dengan Pembimbing 1.",
            Self::TimeFormat => "Format jam harus HH:mm (contoh 09:30).",
            Self::EndAfterStart => "Jam selesai harus lebih besar dari jam mulai.",
            Self::MemoIdRequired => "ID ND wajib diisi.",
            Self::ExamLocationRequired => "Lokasi ujian wajib diisi.",
            Self::StudyProgramRequired => "Prodi wajib diisi.",
        }
    }
}

/// A predicate paired with the rule it enforces. `check` returns `true`
/// when the input passes.
pub struct Rule<T> {
    pub id: RuleId,
    pub check: fn(&T) -> bool,
}

impl<T> Rule<T> {
    pub const fn new(id: RuleId, check: fn(&T) -> bool) -> Self {
        Self { id, check }
    }

    pub fn passes(&self, input: &T) -> bool {
        (self.check)(input)
    }
}

// Rules are plain fn pointers, so Clone/Copy hold for any T.
impl<T> Clone for Rule<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Rule<T> {}

impl<T> std::fmt::Debug for Rule<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("id", &self.id).finish()
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

fn both_times(form: &FormData) -> Option<(TimeOfDay, TimeOfDay)> {
    let start = TimeOfDay::parse(&form.start_time).ok()?;
    let end = TimeOfDay::parse(&form.end_time).ok()?;
    Some((start, end))
}

/// Form rules in evaluation order.
pub(crate) fn form_rules() -> Vec<Rule<FormData>> {
    vec![
        Rule::new(RuleId::StudentNameRequired, |f| present(&f.student_name)),
        Rule::new(RuleId::StudentNumberRequired, |f| present(&f.student_number)),
        Rule::new(RuleId::ThesisTitleRequired, |f| present(&f.thesis_title)),
        Rule::new(RuleId::WeekdayRequired, |f| present(&f.weekday)),
        Rule::new(RuleId::PrimaryAdvisorRequired, |f| present(&f.advisor_1)),
        Rule::new(RuleId::ReviewersRequired, |f| {
            present(&f.reviewer_1) && present(&f.reviewer_2)
        }),
        Rule::new(RuleId::ReviewersDistinct, |f| {
            f.reviewer_1.trim() != f.reviewer_2.trim()
        }),
        Rule::new(RuleId::AdvisorsDistinct, |f| {
            !present(&f.advisor_2) || f.advisor_2.trim() != f.advisor_1.trim()
        }),
        Rule::new(RuleId::TimeFormat, |f| both_times(f).is_some()),
        // Unparseable times were already rejected by TimeFormat.
        Rule::new(RuleId::EndAfterStart, |f| {
            both_times(f).is_some_and(|(start, end)| end > start)
        }),
    ]
}

/// Memo rules in evaluation order.
pub(crate) fn memo_rules() -> Vec<Rule<MemoDetails>> {
    vec![
        Rule::new(RuleId::MemoIdRequired, |m| present(&m.memo_id)),
        Rule::new(RuleId::ExamLocationRequired, |m| present(&m.exam_location)),
        Rule::new(RuleId::StudyProgramRequired, |m| present(&m.study_program)),
    ]
}
