//! Filename sanitisation.

use std::sync::LazyLock;

use regex::Regex;

/// Characters that are illegal in Windows filenames or act as path separators.
static RESERVED_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\\/:*?"<>|]"#).expect("Invalid reserved-char regex"));

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid whitespace regex"));

/// Strip `\ / : * ? " < > |`, collapse whitespace runs to one space and trim.
///
/// ```
/// use sidang_output::sanitize_filename;
///
/// assert_eq!(sanitize_filename("  Budi:  Santoso / S.Kom? "), "Budi Santoso S.Kom");
/// ```
pub fn sanitize_filename(text: &str) -> String {
    let stripped = RESERVED_CHARS.replace_all(text, "");
    WHITESPACE_RUN
        .replace_all(&stripped, " ")
        .trim()
        .to_string()
}
