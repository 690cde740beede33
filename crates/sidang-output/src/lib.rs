//! Document generation for the defense paperwork.
//!
//! This crate turns a validated form into `.docx` files:
//!
//! - [`template`]: picks the template file by document kind and advisor count
//! - [`context`]: builds the placeholder → value mapping for each document
//! - [`render`]: substitutes `{{ key }}` placeholders inside a `.docx` archive
//! - [`generate`]: writes the rendered file under
//!   `<output root>/<Name>_<NPM>/<file name>.docx`
//! - [`sanitize`]: filename cleaning for user-supplied text

pub mod context;
pub mod error;
pub mod generate;
pub mod render;
pub mod sanitize;
pub mod template;

pub use context::{DocumentContext, Participants, memo_context, minutes_context};
pub use error::{OutputError, Result};
pub use generate::{
    GenerateRequest, RenderedDocument, default_file_name, generate_document, generate_documents,
    render_document, student_folder_name,
};
pub use render::{fill_placeholders, render_docx};
pub use sanitize::sanitize_filename;
pub use template::TemplateSet;
