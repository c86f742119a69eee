//! Document files in and out

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use shared_types::Document;
use style_engine::render_html;

fn has_extension(path: &Path, ext: &str) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map_or(false, |e| e.eq_ignore_ascii_case(ext))
}

/// Load a serialized document (`.json`) or plain text, one paragraph per line.
/// Plain text documents take their id from the file stem.
pub fn read_document(path: &Path) -> Result<Document> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read document {}", path.display()))?;

    if has_extension(path, "json") {
        return serde_json::from_str(&raw)
            .with_context(|| format!("Invalid document JSON in {}", path.display()));
    }

    let id = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    Ok(Document::from_plain_text(id, &raw))
}

/// Write the annotated document: HTML for `.html`/`.htm`, JSON otherwise
pub fn write_document(path: &Path, document: &Document) -> Result<()> {
    let body = if has_extension(path, "html") || has_extension(path, "htm") {
        render_html(document)
    } else {
        serde_json::to_string_pretty(document).context("Failed to serialize document")?
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }
    fs::write(path, body).with_context(|| format!("Failed to write {}", path.display()))
}
