//! Faculty member records.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Employee identification scheme of a faculty member.
///
/// `NIP` is the civil-servant number, `NUP` the number for non-civil-servant
/// lecturers. Spreadsheets occasionally carry other labels; those are kept
/// verbatim rather than rejected.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdKind {
    Nip,
    Nup,
    Other(String),
}

impl IdKind {
    /// Parse a spreadsheet label. Matching is case-insensitive; the label is
    /// trimmed first.
    pub fn parse(label: &str) -> Self {
        let trimmed = label.trim();
        match trimmed.to_ascii_uppercase().as_str() {
            "NIP" => Self::Nip,
            "NUP" => Self::Nup,
            _ => Self::Other(trimmed.to_string()),
        }
    }

    /// Label as written into documents.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Nip => "NIP",
            Self::Nup => "NUP",
            Self::Other(label) => label,
        }
    }
}

impl fmt::Display for IdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One faculty member (dosen), keyed by `id_number` in the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacultyMember {
    pub name: String,
    pub id_kind: IdKind,
    pub id_number: String,
}

impl FacultyMember {
    pub fn new(name: impl Into<String>, id_kind: IdKind, id_number: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_kind,
            id_number: id_number.into(),
        }
    }

    /// Label shown in the faculty pickers, e.g. `"Dr. A — NIP: 123"`.
    pub fn display_label(&self) -> String {
        format!("{} — {}: {}", self.name, self.id_kind, self.id_number)
    }
}
