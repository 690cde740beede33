//! Shared utilities for the sidang crates.
//!
//! Currently this is the Indonesian formatting used when filling document
//! templates: weekday and month names, long dates and ordinal words.

pub mod format;

pub use format::{
    format_long_date, month_name, ordinal_word, weekday_name, weekday_name_from_number,
};
