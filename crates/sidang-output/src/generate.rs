//! Writing rendered documents to disk.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use sidang_model::DocumentKind;

use crate::context::DocumentContext;
use crate::error::{OutputError, Result};
use crate::render::render_docx;
use crate::sanitize::sanitize_filename;

/// Everything needed to produce one document.
#[derive(Debug, Clone)]
pub struct GenerateRequest {
    pub kind: DocumentKind,
    /// Template file to render.
    pub template: PathBuf,
    /// Directory under which the per-student folder is created.
    pub output_root: PathBuf,
    pub student_name: String,
    pub student_number: String,
    pub context: DocumentContext,
    /// Custom filename without extension. Blank falls back to
    /// [`default_file_name`].
    pub file_name: Option<String>,
}

/// Per-student folder name, `<Name>_<NPM>`.
///
/// ```
/// use sidang_output::student_folder_name;
///
/// assert_eq!(student_folder_name("Budi: Santoso", "2010/511"), "Budi Santoso_2010511");
/// ```
pub fn student_folder_name(student_name: &str, student_number: &str) -> String {
    format!(
        "{}_{}",
        sanitize_filename(student_name),
        sanitize_filename(student_number)
    )
}

/// Default filename (without extension) for `kind`.
pub fn default_file_name(kind: DocumentKind, student_name: &str, student_number: &str) -> String {
    format!(
        "{}_{}",
        kind.title(),
        student_folder_name(student_name, student_number)
    )
}

fn io_error(operation: &'static str, path: &Path) -> impl FnOnce(std::io::Error) -> OutputError {
    let path = path.to_path_buf();
    move |source| OutputError::Io {
        operation,
        path,
        source,
    }
}

/// Write `bytes` to `path` via a temp sibling and rename.
fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("docx.tmp");

    let mut file = File::create(&temp_path).map_err(io_error("create", &temp_path))?;
    file.write_all(bytes).map_err(io_error("write", &temp_path))?;
    file.sync_all().map_err(io_error("sync", &temp_path))?;
    drop(file);

    if let Err(source) = fs::rename(&temp_path, path) {
        let _ = fs::remove_file(&temp_path);
        return Err(OutputError::Io {
            operation: "rename into",
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}

/// A filled document held in memory, not yet written.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub kind: DocumentKind,
    /// Destination `<output_root>/<Name>_<NPM>/<file name>.docx`.
    pub path: PathBuf,
    pub bytes: Vec<u8>,
}

impl RenderedDocument {
    /// Create the student folder and write the document into it.
    pub fn write(&self) -> Result<PathBuf> {
        if let Some(folder) = self.path.parent() {
            fs::create_dir_all(folder).map_err(io_error("create directory", folder))?;
        }
        write_atomic(&self.path, &self.bytes)?;

        tracing::info!(kind = ?self.kind, "Generated {}", self.path.display());
        Ok(self.path.clone())
    }
}

/// Render the request's template without touching the output folder.
pub fn render_document(request: &GenerateRequest) -> Result<RenderedDocument> {
    if !request.template.is_file() {
        return Err(OutputError::TemplateNotFound {
            path: request.template.clone(),
        });
    }

    let folder = request.output_root.join(student_folder_name(
        &request.student_name,
        &request.student_number,
    ));
    let stem = request
        .file_name
        .as_deref()
        .map(sanitize_filename)
        .filter(|name| !name.is_empty())
        .unwrap_or_else(|| {
            default_file_name(request.kind, &request.student_name, &request.student_number)
        });

    Ok(RenderedDocument {
        kind: request.kind,
        path: folder.join(format!("{stem}.docx")),
        bytes: render_docx(&request.template, &request.context)?,
    })
}

/// Render the request's template and write it to
/// `<output_root>/<Name>_<NPM>/<file name>.docx`. Returns the written path.
pub fn generate_document(request: &GenerateRequest) -> Result<PathBuf> {
    render_document(request)?.write()
}

/// Render every request first, then write them all. A template that fails
/// to render leaves no file behind.
pub fn generate_documents(requests: &[GenerateRequest]) -> Result<Vec<PathBuf>> {
    let rendered = requests
        .iter()
        .map(render_document)
        .collect::<Result<Vec<_>>>()?;
    rendered.iter().map(RenderedDocument::write).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_file_names() {
        assert_eq!(
            default_file_name(DocumentKind::MinutesAndGrades, "Budi", "2010511001"),
            "Berita Acara dan Nilai Ujian Skripsi_Budi_2010511001"
        );
        assert_eq!(
            default_file_name(DocumentKind::Memo, " Budi  Santoso ", "2010511001"),
            "Undangan Nota Dinas Ujian Skripsi_Budi Santoso_2010511001"
        );
    }

    #[test]
    fn test_missing_template() {
        let dir = tempfile::TempDir::new().unwrap();
        let request = GenerateRequest {
            kind: DocumentKind::Memo,
            template: dir.path().join("absent.docx"),
            output_root: dir.path().to_path_buf(),
            student_name: "Budi".to_string(),
            student_number: "1".to_string(),
            context: DocumentContext::new(),
            file_name: None,
        };
        assert!(matches!(
            generate_document(&request),
            Err(OutputError::TemplateNotFound { .. })
        ));
        assert!(!dir.path().join("Budi_1").exists());
    }

    #[test]
    fn test_corrupt_template_writes_nothing() {
        let dir = tempfile::TempDir::new().unwrap();
        let corrupt = dir.path().join("corrupt.docx");
        std::fs::write(&corrupt, b"not a zip").unwrap();

        let request = |kind, template: PathBuf| GenerateRequest {
            kind,
            template,
            output_root: dir.path().join("out"),
            student_name: "Budi".to_string(),
            student_number: "1".to_string(),
            context: DocumentContext::new(),
            file_name: None,
        };
        let requests = [
            request(DocumentKind::MinutesAndGrades, corrupt.clone()),
            request(DocumentKind::Memo, corrupt),
        ];

        assert!(matches!(
            generate_documents(&requests),
            Err(OutputError::TemplateArchive { .. })
        ));
        assert!(!dir.path().join("out").exists());
    }
}
