//! Message hierarchy for the Elm-style architecture.
//!
//! All user interactions and background results flow through [`Message`].

pub mod form;
pub mod resources;

use std::path::PathBuf;

use crate::error::GuiError;

pub use form::FormMessage;
pub use resources::ResourceMessage;

/// Root message enum for the application.
#[derive(Debug, Clone)]
pub enum Message {
    /// Form field edits
    Form(FormMessage),

    /// Spreadsheet, template folder and output folder selection
    Resources(ResourceMessage),

    /// Generate button pressed
    Generate,

    /// Generation finished; paths of the written documents
    Generated(Result<Vec<PathBuf>, GuiError>),

    /// Close the modal dialog
    DismissModal,

    /// No operation (used for optional results)
    Noop,
}
