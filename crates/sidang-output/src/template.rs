//! Template file selection.

use std::path::{Path, PathBuf};

use sidang_model::{AdvisorCount, DocumentKind};

use crate::error::{OutputError, Result};

/// A directory holding the four `.docx` templates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateSet {
    dir: PathBuf,
}

impl TemplateSet {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the template for `kind` with `advisors` advisors. The file
    /// is not checked for existence.
    pub fn path_for(&self, kind: DocumentKind, advisors: AdvisorCount) -> PathBuf {
        self.dir.join(kind.template_file_name(advisors))
    }

    /// Like [`TemplateSet::path_for`], failing with
    /// [`OutputError::TemplateNotFound`] when the file is absent.
    pub fn resolve(&self, kind: DocumentKind, advisors: AdvisorCount) -> Result<PathBuf> {
        let path = self.path_for(kind, advisors);
        if path.is_file() {
            Ok(path)
        } else {
            Err(OutputError::TemplateNotFound { path })
        }
    }

    /// Template paths that are expected but absent.
    pub fn missing(&self) -> Vec<PathBuf> {
        DocumentKind::ALL
            .iter()
            .flat_map(|kind| {
                [AdvisorCount::One, AdvisorCount::Two]
                    .into_iter()
                    .map(move |advisors| self.path_for(*kind, advisors))
            })
            .filter(|path| !path.is_file())
            .collect()
    }
}
