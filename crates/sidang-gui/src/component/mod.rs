//! Reusable UI building blocks.
//!
//! - **Containers**: `SectionCard`
//! - **Form**: `form_field`, `labeled`, `stepper_field`
//! - **Overlays**: `modal`
//!
//! Components return `Element<M>` so views compose them directly.

mod form_field;
mod modal;
mod section_card;

pub use form_field::{form_field, labeled, stepper_field};
pub use modal::{ModalTone, modal};
pub use section_card::SectionCard;
