//! Domain types for thesis defense (ujian skripsi) document generation.
//!
//! This crate holds the plain data shared by every other crate in the
//! workspace:
//!
//! - [`faculty`]: faculty members (dosen) as loaded from the spreadsheet
//! - [`form`]: the form record collected from the user, plus the memo inputs
//! - [`time`]: `HH:mm` time-of-day parsing and ordering
//! - [`document`]: document kinds and advisor-count template variants
//!
//! # Example
//!
//! ```
//! use sidang_model::{FacultyMember, IdKind};
//!
//! let member = FacultyMember::new("Dr. Sari", IdKind::Nip, "198001012005012001");
//! assert_eq!(member.display_label(), "Dr. Sari — NIP: 198001012005012001");
//! ```

pub mod document;
pub mod error;
pub mod faculty;
pub mod form;
pub mod time;

pub use document::{AdvisorCount, DocumentKind};
pub use error::{ModelError, Result};
pub use faculty::{FacultyMember, IdKind};
pub use form::{FormData, MemoDetails};
pub use time::TimeOfDay;
