//! `{{ key }}` substitution inside `.docx` archives.
//!
//! A `.docx` file is a zip archive of WordprocessingML parts. Text lives in
//! `<w:t>` nodes, and Word freely splits a single typed placeholder across
//! several runs (spell-check marks, revision ids, formatting changes). The
//! renderer therefore matches placeholders against the concatenated text of
//! the `<w:t>` nodes of one paragraph, writes each replacement into the node
//! where the placeholder starts, and removes the consumed characters from the
//! nodes that follow. A placeholder never spans two paragraphs. Run
//! properties and everything outside `<w:t>` are left untouched.

use std::collections::BTreeSet;
use std::io::{Cursor, Read, Write};
use std::ops::Range;
use std::path::Path;
use std::sync::LazyLock;

use quick_xml::escape::{escape, unescape};
use regex::Regex;
use zip::write::SimpleFileOptions;
use zip::{ZipArchive, ZipWriter};

use crate::context::DocumentContext;
use crate::error::{OutputError, Result};

/// A `<w:t>` element with content. Self-closing `<w:t/>` is skipped, as are
/// siblings such as `<w:tab/>` and `<w:tbl>`.
static TEXT_NODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"<w:t(?:\s[^>]*[^/>])?\s*>(?s:(.*?))</w:t>").expect("Invalid text node regex")
});

/// Start or end of a `<w:p>` paragraph. `<w:pPr>` does not match.
static PARAGRAPH_EDGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<w:p[\s>/]|</w:p>").expect("Invalid paragraph regex"));

static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\{\{\s*([A-Za-z_][A-Za-z0-9_]*)\s*\}\}").expect("Invalid placeholder regex")
});

/// Parts that can carry placeholders.
fn is_text_part(name: &str) -> bool {
    name == "word/document.xml"
        || ((name.starts_with("word/header") || name.starts_with("word/footer"))
            && name.ends_with(".xml"))
}

struct TextNode {
    /// Byte range of the whole element in the part.
    span: Range<usize>,
    /// Unescaped text content.
    text: String,
    /// Paragraph the node belongs to, counted in paragraph edges.
    paragraph: usize,
}

/// Copy `full[range]` into the per-node outputs, split at node bounds.
fn copy_range(full: &str, bounds: &[Range<usize>], range: Range<usize>, outputs: &mut [String]) {
    for (node, out) in bounds.iter().zip(outputs.iter_mut()) {
        let start = node.start.max(range.start);
        let end = node.end.min(range.end);
        if start < end {
            out.push_str(&full[start..end]);
        }
    }
}

/// Substitute placeholders across the text nodes of one paragraph and
/// return the new text of each node.
fn fill_paragraph(
    nodes: &[TextNode],
    context: &DocumentContext,
    unknown: &mut BTreeSet<String>,
) -> Vec<String> {
    let mut full = String::new();
    let mut bounds = Vec::with_capacity(nodes.len());
    for node in nodes {
        let start = full.len();
        full.push_str(&node.text);
        bounds.push(start..full.len());
    }

    if !PLACEHOLDER.is_match(&full) {
        return nodes.iter().map(|node| node.text.clone()).collect();
    }

    let mut outputs = vec![String::new(); nodes.len()];
    let mut cursor = 0;

    for caps in PLACEHOLDER.captures_iter(&full) {
        let (Some(whole), Some(key)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        copy_range(&full, &bounds, cursor..whole.start(), &mut outputs);

        let value = context.get(key.as_str()).unwrap_or_else(|| {
            unknown.insert(key.as_str().to_string());
            ""
        });
        if let Some(owner) = bounds.iter().position(|b| b.contains(&whole.start())) {
            outputs[owner].push_str(value);
        }
        cursor = whole.end();
    }
    copy_range(&full, &bounds, cursor..full.len(), &mut outputs);

    outputs
}

fn fill_part(part: &str, xml: &str, context: &DocumentContext) -> Result<String> {
    let edges: Vec<usize> = PARAGRAPH_EDGE.find_iter(xml).map(|m| m.start()).collect();

    let mut nodes = Vec::new();
    for caps in TEXT_NODE.captures_iter(xml) {
        let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        let text = unescape(inner.as_str()).map_err(|e| OutputError::TemplatePart {
            part: part.to_string(),
            message: e.to_string(),
        })?;
        nodes.push(TextNode {
            span: whole.range(),
            text: text.into_owned(),
            paragraph: edges.partition_point(|&edge| edge < whole.start()),
        });
    }

    let mut outputs = Vec::with_capacity(nodes.len());
    let mut unknown = BTreeSet::new();
    for paragraph in nodes.chunk_by(|a, b| a.paragraph == b.paragraph) {
        outputs.extend(fill_paragraph(paragraph, context, &mut unknown));
    }

    if !unknown.is_empty() {
        tracing::warn!(part, keys = ?unknown, "Template placeholders without a value");
    }

    let mut result = String::with_capacity(xml.len());
    let mut last = 0;
    for (node, out) in nodes.iter().zip(&outputs) {
        if *out == node.text {
            continue;
        }
        result.push_str(&xml[last..node.span.start]);
        result.push_str(r#"<w:t xml:space="preserve">"#);
        result.push_str(&escape(out.as_str()));
        result.push_str("</w:t>");
        last = node.span.end;
    }
    result.push_str(&xml[last..]);

    Ok(result)
}

/// Replace `{{ key }}` placeholders in one WordprocessingML part.
///
/// Keys missing from `context` render as an empty string.
///
/// ```
/// use sidang_output::{DocumentContext, fill_placeholders};
///
/// let context: DocumentContext = [("npm", "2010511001")].into_iter().collect();
/// let xml = "<w:p><w:r><w:t>NPM: {{ n</w:t></w:r><w:r><w:t>pm }}</w:t></w:r></w:p>";
/// let filled = fill_placeholders(xml, &context).unwrap();
/// assert_eq!(
///     filled,
///     r#"<w:p><w:r><w:t xml:space="preserve">NPM: 2010511001</w:t></w:r><w:r><w:t xml:space="preserve"></w:t></w:r></w:p>"#
/// );
/// ```
pub fn fill_placeholders(xml: &str, context: &DocumentContext) -> Result<String> {
    fill_part("word/document.xml", xml, context)
}

/// Render the template at `template` with `context` and return the bytes of
/// the filled `.docx`.
///
/// Every archive entry is copied with its original compression method; only
/// the document body, headers and footers are rewritten.
pub fn render_docx(template: &Path, context: &DocumentContext) -> Result<Vec<u8>> {
    let bytes = std::fs::read(template).map_err(|source| OutputError::Io {
        operation: "read",
        path: template.to_path_buf(),
        source,
    })?;

    let archive_error = |e: zip::result::ZipError| OutputError::TemplateArchive {
        path: template.to_path_buf(),
        message: e.to_string(),
    };

    let mut archive = ZipArchive::new(Cursor::new(bytes)).map_err(archive_error)?;
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));

    for index in 0..archive.len() {
        let mut entry = archive.by_index(index).map_err(archive_error)?;
        let name = entry.name().to_string();
        let options = SimpleFileOptions::default().compression_method(entry.compression());

        if entry.is_dir() {
            writer.add_directory(name.as_str(), options)?;
            continue;
        }

        let mut content = Vec::new();
        entry
            .read_to_end(&mut content)
            .map_err(|e| OutputError::TemplateArchive {
                path: template.to_path_buf(),
                message: format!("{name}: {e}"),
            })?;

        let content = if is_text_part(&name) {
            let xml = String::from_utf8(content).map_err(|e| OutputError::TemplatePart {
                part: name.clone(),
                message: e.to_string(),
            })?;
            tracing::debug!(part = %name, "Filling template part");
            fill_part(&name, &xml, context)?.into_bytes()
        } else {
            content
        };

        writer.start_file(name.as_str(), options)?;
        writer.write_all(&content).map_err(|source| OutputError::Io {
            operation: "write entry of",
            path: template.to_path_buf(),
            source,
        })?;
    }

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context() -> DocumentContext {
        [
            ("nama_mahasiswa", "Budi & Sari"),
            ("npm", "2010511001"),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_single_run() {
        let xml = "<w:r><w:t>Nama: {{nama_mahasiswa}}</w:t></w:r>";
        let filled = fill_placeholders(xml, &context()).unwrap();
        assert_eq!(
            filled,
            r#"<w:r><w:t xml:space="preserve">Nama: Budi &amp; Sari</w:t></w:r>"#
        );
    }

    #[test]
    fn test_split_across_three_runs() {
        let xml = concat!(
            "<w:r><w:t>{{</w:t></w:r>",
            "<w:r><w:rPr><w:b/></w:rPr><w:t xml:space=\"preserve\"> npm </w:t></w:r>",
            "<w:r><w:t>}} lulus</w:t></w:r>",
        );
        let filled = fill_placeholders(xml, &context()).unwrap();
        assert!(filled.contains(r#"<w:t xml:space="preserve">2010511001</w:t>"#));
        assert!(filled.contains("<w:rPr><w:b/></w:rPr>"));
        assert!(filled.contains(r#"<w:t xml:space="preserve"> lulus</w:t>"#));
        assert!(!filled.contains("{{"));
    }

    #[test]
    fn test_untouched_without_placeholders() {
        let xml = "<w:r><w:t>Tanpa isian &amp; tetap</w:t><w:tab/><w:t/></w:r>";
        assert_eq!(fill_placeholders(xml, &context()).unwrap(), xml);
    }

    #[test]
    fn test_unknown_key_renders_empty() {
        let xml = "<w:t>[{{ tidak_ada }}]</w:t>";
        let filled = fill_placeholders(xml, &context()).unwrap();
        assert_eq!(filled, r#"<w:t xml:space="preserve">[]</w:t>"#);
    }

    #[test]
    fn test_escaped_text_is_matched_after_unescape() {
        let xml = "<w:t>&lt;{{npm}}&gt;</w:t>";
        let filled = fill_placeholders(xml, &context()).unwrap();
        assert_eq!(filled, r#"<w:t xml:space="preserve">&lt;2010511001&gt;</w:t>"#);
    }

    #[test]
    fn test_placeholder_does_not_span_paragraphs() {
        let xml = concat!(
            "<w:p><w:r><w:t>Akhir {{</w:t></w:r></w:p>",
            "<w:p><w:pPr><w:jc w:val=\"left\"/></w:pPr><w:r><w:t>npm}} awal</w:t></w:r></w:p>",
        );
        assert_eq!(fill_placeholders(xml, &context()).unwrap(), xml);
    }

    #[test]
    fn test_each_paragraph_filled_on_its_own() {
        let xml = concat!(
            "<w:p><w:r><w:t>{{ n</w:t></w:r><w:r><w:t>pm }}</w:t></w:r></w:p>",
            "<w:p><w:r><w:t>{{nama_mahasiswa}}</w:t></w:r></w:p>",
        );
        let filled = fill_placeholders(xml, &context()).unwrap();
        assert_eq!(
            filled,
            concat!(
                r#"<w:p><w:r><w:t xml:space="preserve">2010511001</w:t></w:r>"#,
                r#"<w:r><w:t xml:space="preserve"></w:t></w:r></w:p>"#,
                r#"<w:p><w:r><w:t xml:space="preserve">Budi &amp; Sari</w:t></w:r></w:p>"#,
            )
        );
    }

    #[test]
    fn test_text_node_with_trailing_space_in_tag() {
        let xml = "<w:r><w:t >{{npm}}</w:t><w:t />x</w:r>";
        let filled = fill_placeholders(xml, &context()).unwrap();
        assert_eq!(
            filled,
            r#"<w:r><w:t xml:space="preserve">2010511001</w:t><w:t />x</w:r>"#
        );
    }

    #[test]
    fn test_text_parts() {
        assert!(is_text_part("word/document.xml"));
        assert!(is_text_part("word/header1.xml"));
        assert!(is_text_part("word/footer2.xml"));
        assert!(!is_text_part("word/styles.xml"));
        assert!(!is_text_part("word/_rels/header1.xml.rels"));
    }
}
