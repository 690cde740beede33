//! The generate action: readiness checks, validation, then both documents.

use std::path::PathBuf;

use sidang_ingest::FacultyDirectory;
use sidang_model::{DocumentKind, FacultyMember, FormData, MemoDetails};
use sidang_output::{
    GenerateRequest, OutputError, Participants, TemplateSet, generate_documents, memo_context,
    minutes_context,
};
use sidang_validate::{validate_form, validate_memo};

use crate::error::GuiError;
use crate::state::{FormState, Settings};

/// A validated form with everything needed to write both documents.
#[derive(Debug, Clone)]
pub struct GenerationJob {
    pub form: FormData,
    pub memo: MemoDetails,
    pub advisor_1: Option<FacultyMember>,
    pub advisor_2: Option<FacultyMember>,
    pub reviewer_1: Option<FacultyMember>,
    pub reviewer_2: Option<FacultyMember>,
    pub templates: TemplateSet,
    pub output_root: PathBuf,
}

impl GenerationJob {
    /// Check prerequisites and validate the form, then the memo inputs.
    /// The first problem found is returned.
    pub fn prepare(
        form: &FormState,
        directory: Option<&FacultyDirectory>,
        settings: &Settings,
    ) -> Result<Self, GuiError> {
        let directory = directory
            .ok_or_else(|| GuiError::not_ready("Excel dosen belum diload / tidak ditemukan."))?;

        let data = form.to_form_data(directory)?;
        validate_form(&data).into_result()?;
        let memo = form.memo();
        validate_memo(&memo).into_result()?;

        let templates = TemplateSet::new(settings.template_dir());
        for kind in DocumentKind::ALL {
            templates
                .resolve(kind, data.advisor_count())
                .map_err(|e| GuiError::not_ready(e.to_string()))?;
        }

        let people = form.participants(directory);
        Ok(Self {
            form: data,
            memo,
            advisor_1: people.advisor_1.cloned(),
            advisor_2: people.advisor_2.cloned(),
            reviewer_1: people.reviewer_1.cloned(),
            reviewer_2: people.reviewer_2.cloned(),
            templates,
            output_root: settings.output_root(),
        })
    }

    fn participants(&self) -> Participants<'_> {
        Participants {
            advisor_1: self.advisor_1.as_ref(),
            advisor_2: self.advisor_2.as_ref(),
            reviewer_1: self.reviewer_1.as_ref(),
            reviewer_2: self.reviewer_2.as_ref(),
        }
    }

    /// Render the minutes and the memo, then write both. Nothing is
    /// written unless both render.
    pub fn run(&self) -> Result<Vec<PathBuf>, OutputError> {
        let people = self.participants();
        let advisors = self.form.advisor_count();

        let requests = DocumentKind::ALL
            .iter()
            .map(|&kind| {
                let context = match kind {
                    DocumentKind::MinutesAndGrades => minutes_context(&self.form, &people),
                    DocumentKind::Memo => memo_context(&self.form, &self.memo, &people),
                };
                Ok(GenerateRequest {
                    kind,
                    template: self.templates.resolve(kind, advisors)?,
                    output_root: self.output_root.clone(),
                    student_name: self.form.student_name.clone(),
                    student_number: self.form.student_number.clone(),
                    context,
                    file_name: None,
                })
            })
            .collect::<Result<Vec<_>, OutputError>>()?;

        generate_documents(&requests)
    }
}

/// Run `job` on the blocking pool.
pub async fn run_job(job: GenerationJob) -> Result<Vec<PathBuf>, GuiError> {
    tokio::task::spawn_blocking(move || job.run().map_err(GuiError::from))
        .await
        .map_err(|e| GuiError::internal(format!("Generate task failed: {e}")))?
}
