//! Faculty directory built from the spreadsheet.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use polars::prelude::DataFrame;
use sidang_model::{FacultyMember, IdKind};

use crate::error::{IngestError, Result};
use crate::sheet::{any_to_text, read_sheet};

/// Columns every faculty spreadsheet must have (after normalisation).
pub const REQUIRED_COLUMNS: [&str; 3] = ["nama", "jenis_id", "id"];

/// Lookup tables for one loaded spreadsheet.
///
/// Owns both indexes: id → member, and picker label → id. Rebuilt from
/// scratch on every load.
#[derive(Debug, Clone, Default)]
pub struct FacultyDirectory {
    by_id: HashMap<String, FacultyMember>,
    id_by_label: BTreeMap<String, String>,
    skipped_rows: usize,
}

impl FacultyDirectory {
    /// Build a directory from members in order. Later members replace
    /// earlier ones with the same id.
    pub fn from_members(members: impl IntoIterator<Item = FacultyMember>) -> Self {
        let mut directory = Self::default();
        for member in members {
            directory.insert(member);
        }
        directory
    }

    /// Build a directory from a normalised DataFrame.
    ///
    /// Fails if any of [`REQUIRED_COLUMNS`] is missing. Rows with an empty
    /// name or id are skipped.
    pub fn from_frame(df: &DataFrame) -> Result<Self> {
        let present: Vec<&str> = df.get_column_names().iter().map(|n| n.as_str()).collect();
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|required| !present.contains(*required))
            .map(|required| (*required).to_string())
            .collect();
        if !missing.is_empty() {
            return Err(IngestError::MissingColumns { missing });
        }

        let name_col = df.column("nama")?;
        let kind_col = df.column("jenis_id")?;
        let id_col = df.column("id")?;

        let mut directory = Self::default();
        for row_idx in 0..df.height() {
            let name = any_to_text(name_col.get(row_idx)?);
            let kind = any_to_text(kind_col.get(row_idx)?);
            let id = any_to_text(id_col.get(row_idx)?);

            if name.is_empty() || id.is_empty() {
                tracing::debug!(row = row_idx + 2, "Skipping row without name or id");
                directory.skipped_rows += 1;
                continue;
            }

            directory.insert(FacultyMember::new(name, IdKind::parse(&kind), id));
        }

        Ok(directory)
    }

    fn insert(&mut self, member: FacultyMember) {
        // Last row wins: drop the label of the record being replaced so every
        // label still resolves to the member it describes.
        if let Some(previous) = self.by_id.get(&member.id_number) {
            tracing::debug!(id = %member.id_number, "Duplicate faculty id, replacing earlier row");
            self.id_by_label.remove(&previous.display_label());
        }
        self.id_by_label
            .insert(member.display_label(), member.id_number.clone());
        self.by_id.insert(member.id_number.clone(), member);
    }

    /// Look up a member by id number.
    pub fn get(&self, id: &str) -> Option<&FacultyMember> {
        self.by_id.get(id.trim())
    }

    /// Resolve a picker label to its member. Empty or unknown labels give `None`.
    pub fn resolve(&self, label: &str) -> Option<&FacultyMember> {
        let label = label.trim();
        if label.is_empty() {
            return None;
        }
        self.id_by_label
            .get(label)
            .and_then(|id| self.by_id.get(id))
    }

    /// All picker labels, sorted ascending.
    pub fn display_labels(&self) -> Vec<String> {
        self.id_by_label.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }

    /// Rows dropped for missing name or id during the last load.
    pub fn skipped_rows(&self) -> usize {
        self.skipped_rows
    }
}

/// Load the faculty spreadsheet at `path` into a [`FacultyDirectory`].
pub fn load_faculty_directory(path: &Path) -> Result<FacultyDirectory> {
    let df = read_sheet(path)?;
    let directory = FacultyDirectory::from_frame(&df)?;

    tracing::info!(
        path = %path.display(),
        members = directory.len(),
        skipped = directory.skipped_rows(),
        "Loaded faculty directory"
    );
    Ok(directory)
}
