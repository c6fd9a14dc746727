//! Directory tree rendering.
//!
//! Walks a directory recursively, applies the filter policy, and emits
//! printable rows with box-drawing connectors. Traversal is best-effort:
//! an unreadable directory contributes no rows instead of failing the
//! run.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use log::debug;

use crate::policy::FilterPolicy;

/// Box-drawing characters for tree rendering.
const BRANCH: &str = "├── ";
const LAST_BRANCH: &str = "└── ";
const VERTICAL: &str = "│   ";
const SPACE: &str = "    ";

/// One directory entry observed during a single traversal step.
struct DirectoryEntry {
    name: String,
    path: PathBuf,
    is_dir: bool,
    size: u64,
}

/// List, filter, and sort a directory's children: directories first,
/// then case-insensitive by name. `None` when the directory cannot be
/// read.
fn children(directory: &Path, base: &Path, policy: &FilterPolicy) -> Option<Vec<DirectoryEntry>> {
    let read = match fs::read_dir(directory) {
        Ok(read) => read,
        Err(err) => {
            debug!("skipping unreadable directory {}: {err}", directory.display());
            return None;
        }
    };

    let mut entries = Vec::new();
    for item in read.flatten() {
        let path = item.path();
        if policy.is_ignored(&path, base) {
            continue;
        }
        let Ok(metadata) = item.metadata() else {
            continue;
        };
        entries.push(DirectoryEntry {
            name: item.file_name().to_string_lossy().into_owned(),
            path,
            is_dir: metadata.is_dir(),
            size: metadata.len(),
        });
    }

    entries.sort_by(|a, b| match (a.is_dir, b.is_dir) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
    });

    Some(entries)
}

/// True if every immediate child of `directory` is filtered out by the
/// policy. This matches the collector's notion of "nothing to collect"
/// one level deep. Unreadable directories count as non-empty.
fn is_effectively_empty(directory: &Path, base: &Path, policy: &FilterPolicy) -> bool {
    match fs::read_dir(directory) {
        Ok(read) => read.flatten().all(|item| policy.is_ignored(&item.path(), base)),
        Err(_) => false,
    }
}

/// Render the tree rows for `directory`.
///
/// The root's own name is not included; callers print it themselves.
/// Directories render as `name/` followed by their recursive rows, a
/// directory with no non-ignored children as `name/ (empty)`, and a
/// zero-byte file as `name (empty)`.
pub fn render_tree(directory: &Path, base: &Path, policy: &FilterPolicy) -> Vec<String> {
    let mut lines = Vec::new();
    render_into(directory, base, policy, "", &mut lines);
    lines
}

fn render_into(
    directory: &Path,
    base: &Path,
    policy: &FilterPolicy,
    prefix: &str,
    lines: &mut Vec<String>,
) {
    let Some(entries) = children(directory, base, policy) else {
        return;
    };

    let count = entries.len();
    for (i, entry) in entries.iter().enumerate() {
        let is_last = i + 1 == count;
        let connector = if is_last { LAST_BRANCH } else { BRANCH };

        if entry.is_dir {
            if is_effectively_empty(&entry.path, base, policy) {
                lines.push(format!("{prefix}{connector}{}/ (empty)", entry.name));
            } else {
                lines.push(format!("{prefix}{connector}{}/", entry.name));
                let continuation = if is_last { SPACE } else { VERTICAL };
                let child_prefix = format!("{prefix}{continuation}");
                render_into(&entry.path, base, policy, &child_prefix, lines);
            }
        } else if entry.size == 0 {
            lines.push(format!("{prefix}{connector}{} (empty)", entry.name));
        } else {
            lines.push(format!("{prefix}{connector}{}", entry.name));
        }
    }
}
