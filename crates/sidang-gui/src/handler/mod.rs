//! Message handlers.
//!
//! Each handler implements [`MessageHandler`] for one message category and
//! the root `App::update` dispatches to it:
//!
//! ```ignore
//! match message {
//!     Message::Form(msg) => FormHandler.handle(&mut self.state, msg),
//!     Message::Resources(msg) => ResourceHandler.handle(&mut self.state, msg),
//!     // ...
//! }
//! ```

mod form;
mod generate;
mod resources;

use iced::Task;

use crate::message::Message;
use crate::state::AppState;

pub use form::FormHandler;
pub use generate::{handle_generate, handle_generated};
pub use resources::ResourceHandler;

/// Handle one message category, mutating state and returning any follow-up
/// task (`Task::none()` when done).
pub trait MessageHandler<M> {
    fn handle(&self, state: &mut AppState, msg: M) -> Task<Message>;
}
