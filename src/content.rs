//! File content reading and language tagging.
//!
//! Reading never fails: undecodable bytes fall back to a single-byte
//! decode and I/O errors become placeholder text, so document assembly
//! always completes.

use std::fs;
use std::path::Path;

use log::warn;

/// Sentinel text embedded for zero-byte files.
pub const EMPTY_FILE: &str = "(empty file)";

/// Read a file's content as text.
///
/// Zero-byte files yield [`EMPTY_FILE`]. Content that is not valid
/// UTF-8 is decoded Latin-1 style, mapping every byte onto
/// U+0000..U+00FF so nothing is lost, at the cost of mangling true
/// binary content that slipped past the sniff. I/O failures yield an
/// `[Error: ...]` placeholder instead of propagating.
pub fn read_content(path: &Path) -> String {
    let bytes = match fs::read(path) {
        Ok(bytes) => bytes,
        Err(err) => {
            warn!("unable to read {}: {err}", path.display());
            return format!("[Error: {err}]");
        }
    };

    if bytes.is_empty() {
        return EMPTY_FILE.to_string();
    }

    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => err.into_bytes().iter().map(|&b| b as char).collect(),
    }
}

/// Fixed extension to fenced-block language tag mapping.
///
/// The table is closed; unmapped extensions get an untagged block.
pub fn language_tag(path: &Path) -> &'static str {
    match path.extension().and_then(|e| e.to_str()) {
        Some("py") => "python",
        Some("js") => "javascript",
        Some("jsx") => "jsx",
        Some("ts") => "typescript",
        Some("tsx") => "tsx",
        Some("html") => "html",
        Some("css") => "css",
        Some("scss") => "scss",
        Some("json") => "json",
        Some("md") => "markdown",
        Some("yml") | Some("yaml") => "yaml",
        Some("sh") | Some("bash") => "bash",
        Some("sql") => "sql",
        Some("java") => "java",
        Some("cpp") => "cpp",
        Some("c") => "c",
        Some("go") => "go",
        Some("rs") => "rust",
        Some("rb") => "ruby",
        Some("php") => "php",
        _ => "",
    }
}
