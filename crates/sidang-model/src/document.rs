//! Document kinds and template variants.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// The two documents generated for one defense.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DocumentKind {
    /// Berita Acara dan Nilai: examination minutes and grading form.
    MinutesAndGrades,
    /// Undangan Nota Dinas: official memo inviting the examiners.
    Memo,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 2] = [Self::MinutesAndGrades, Self::Memo];

    /// Human-readable title, also the default output filename prefix.
    pub fn title(&self) -> &'static str {
        match self {
            Self::MinutesAndGrades => "Berita Acara dan Nilai Ujian Skripsi",
            Self::Memo => "Undangan Nota Dinas Ujian Skripsi",
        }
    }

    /// Template filename stem; the advisor-count suffix is appended by
    /// [`DocumentKind::template_file_name`].
    fn template_stem(&self) -> &'static str {
        match self {
            Self::MinutesAndGrades => "template_berita_acara_dan_nilai",
            Self::Memo => "template_undangan_nota_dinas",
        }
    }

    /// Template file for this document and advisor count,
    /// e.g. `template_undangan_nota_dinas_2pembimbing.docx`.
    pub fn template_file_name(&self, advisors: AdvisorCount) -> String {
        format!(
            "{}_{}pembimbing.docx",
            self.template_stem(),
            advisors.as_number()
        )
    }
}

/// Number of assigned advisors; selects the template variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AdvisorCount {
    One,
    Two,
}

impl AdvisorCount {
    /// Only 1 and 2 are valid.
    pub fn from_count(count: usize) -> Result<Self> {
        match count {
            1 => Ok(Self::One),
            2 => Ok(Self::Two),
            _ => Err(ModelError::InvalidAdvisorCount { count }),
        }
    }

    pub fn as_number(&self) -> u8 {
        match self {
            Self::One => 1,
            Self::Two => 2,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_template_file_names() {
        assert_eq!(
            DocumentKind::MinutesAndGrades.template_file_name(AdvisorCount::One),
            "template_berita_acara_dan_nilai_1pembimbing.docx"
        );
        assert_eq!(
            DocumentKind::Memo.template_file_name(AdvisorCount::Two),
            "template_undangan_nota_dinas_2pembimbing.docx"
        );
    }

    #[test]
    fn test_advisor_count_bounds() {
        assert_eq!(AdvisorCount::from_count(1).unwrap(), AdvisorCount::One);
        assert_eq!(AdvisorCount::from_count(2).unwrap(), AdvisorCount::Two);
        assert!(AdvisorCount::from_count(0).is_err());
        assert!(AdvisorCount::from_count(3).is_err());
    }
}
