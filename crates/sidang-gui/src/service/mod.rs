//! Background work driven by `Task::perform`.
//!
//! Blocking work (spreadsheet parsing, zip rendering) runs on tokio's blocking
//! pool so the window keeps repainting.

pub mod directory;
pub mod generate;

pub use directory::{load_directory, load_directory_task};
pub use generate::{GenerationJob, run_job};
