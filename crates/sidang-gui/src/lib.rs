//! Thesis defense paperwork generator - GUI library.
//!
//! Built with Iced 0.14 using the Elm architecture:
//!
//! - [`state`]: form values, loaded faculty, persisted settings
//! - [`message`]: everything that can happen
//! - [`handler`]: state transitions per message category
//! - [`view`]: pure rendering
//! - [`service`]: blocking work moved off the UI thread

pub mod app;
pub mod component;
pub mod error;
pub mod handler;
pub mod message;
pub mod paths;
pub mod service;
pub mod state;
pub mod theme;
pub mod view;

pub use app::App;
pub use error::GuiError;
