//! Placeholder contexts for the two document kinds.

use std::collections::BTreeMap;

use sidang_common::{format_long_date, ordinal_word};
use sidang_model::{FacultyMember, FormData, MemoDetails, TimeOfDay};

/// String-keyed values substituted into a template.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocumentContext {
    values: BTreeMap<String, String>,
}

impl DocumentContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.values.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for DocumentContext {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut context = Self::new();
        for (key, value) in iter {
            context.insert(key, value);
        }
        context
    }
}

/// Faculty members resolved for each role on the form.
#[derive(Debug, Clone, Copy, Default)]
pub struct Participants<'a> {
    pub advisor_1: Option<&'a FacultyMember>,
    pub advisor_2: Option<&'a FacultyMember>,
    pub reviewer_1: Option<&'a FacultyMember>,
    pub reviewer_2: Option<&'a FacultyMember>,
}

/// Zero-padded `HH:mm` when parseable, otherwise the trimmed input.
fn display_time(raw: &str) -> String {
    TimeOfDay::parse(raw).map_or_else(|_| raw.trim().to_string(), |t| t.to_string())
}

fn insert_member(
    context: &mut DocumentContext,
    name_key: &str,
    suffix: &str,
    member: Option<&FacultyMember>,
) {
    let (name, kind, number) = member.map_or_else(
        || (String::new(), String::new(), String::new()),
        |m| (m.name.clone(), m.id_kind.to_string(), m.id_number.clone()),
    );
    context.insert(name_key, name);
    context.insert(format!("nipnup_{suffix}"), kind);
    context.insert(format!("nomor_nipnup_{suffix}"), number);
}

/// Context for the examination minutes and grading form.
pub fn minutes_context(form: &FormData, people: &Participants<'_>) -> DocumentContext {
    let mut context = DocumentContext::new();

    context.insert("hari", form.weekday.trim());
    context.insert("tanggal_bulan_tahun", format_long_date(form.exam_date));
    context.insert("jam_mulai", display_time(&form.start_time));
    context.insert("jam_selesai", display_time(&form.end_time));
    context.insert("urutan", ordinal_word(form.attempt));

    context.insert("nama_mahasiswa", form.student_name.trim());
    context.insert("npm", form.student_number.trim());
    context.insert("judul_skripsi", form.thesis_title.trim());

    insert_member(&mut context, "pembimbing_1", "pembimbing1", people.advisor_1);
    insert_member(&mut context, "pembimbing_2", "pembimbing2", people.advisor_2);
    insert_member(&mut context, "penguji_1", "penguji1", people.reviewer_1);
    insert_member(&mut context, "penguji_2", "penguji2", people.reviewer_2);

    context
}

/// Context for the memo inviting examiners: the minutes keys plus the
/// memo-specific ones.
pub fn memo_context(
    form: &FormData,
    memo: &MemoDetails,
    people: &Participants<'_>,
) -> DocumentContext {
    let mut context = minutes_context(form, people);
    context.insert("id_nd", memo.memo_id.trim());
    context.insert("lokasi_ujian", memo.exam_location.trim());
    context.insert("prodi", memo.study_program.trim());
    context
}
