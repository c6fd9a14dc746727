//! Final document assembly.
//!
//! Combines the project header, the rendered tree, and every collected
//! file's content into one markdown document. The tree renderer and the
//! file collector both run once, against the same resolved root and the
//! same policy instance. The only fatal error is a project root that
//! does not exist; everything below that boundary is absorbed as
//! embedded placeholders or silently skipped entries.

use std::fs;
use std::path::Path;

use log::info;

use crate::collector::collect_files;
use crate::content::{language_tag, read_content};
use crate::errors::RepodocError;
use crate::policy::FilterPolicy;
use crate::report::Reporter;
use crate::tree::render_tree;

/// Horizontal rule separating document sections.
const RULE: &str = "---\n\n";

/// Assemble the complete documentation text for `project_path`.
///
/// The document has a fixed shape: header, fenced folder-structure
/// block, then one heading plus fenced content block per collected
/// file, all separated by horizontal rules.
pub fn assemble(
    project_path: &Path,
    policy: &FilterPolicy,
    reporter: &mut dyn Reporter,
) -> Result<String, RepodocError> {
    if !project_path.exists() {
        return Err(RepodocError::PathNotFound(project_path.to_path_buf()));
    }
    let root = fs::canonicalize(project_path)?;

    let project_name = root.file_name().map_or_else(
        || root.to_string_lossy().into_owned(),
        |n| n.to_string_lossy().into_owned(),
    );

    info!("generating documentation for {}", root.display());

    // Pre-allocate for typical document size
    let mut output = String::with_capacity(8192);

    // Header
    output.push_str(&format!("# Project Documentation: {project_name}\n\n"));
    output.push_str(&format!("**Generated from:** `{}`\n\n", root.display()));
    output.push_str(RULE);

    // Folder structure
    output.push_str("## 📁 Folder Structure\n\n");
    output.push_str("```\n");
    output.push_str(&format!("{project_name}/\n"));

    reporter.tree_started();
    let lines = render_tree(&root, &root, policy);
    reporter.tree_finished();

    for line in &lines {
        output.push_str(line);
        output.push('\n');
    }
    output.push_str("```\n\n");
    output.push_str(RULE);

    // File contents
    output.push_str("## 📄 File Contents\n\n");

    reporter.collect_started();
    let files = collect_files(&root, &root, policy);
    reporter.collect_finished(files.len());

    let total = files.len();
    for (i, file) in files.iter().enumerate() {
        let relative = file.strip_prefix(&root).unwrap_or(file);
        reporter.file_processed(i + 1, total, relative);

        output.push_str(&format!("### `{}`\n\n", relative.display()));

        let content = read_content(file);
        output.push_str(&format!("```{}\n", language_tag(file)));
        output.push_str(&content);
        if !content.ends_with('\n') {
            output.push('\n');
        }
        output.push_str("```\n\n");
        output.push_str(RULE);
    }

    Ok(output)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Preset;
    use crate::report::NullReporter;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn generate(root: &Path, policy: &FilterPolicy) -> String {
        assemble(root, policy, &mut NullReporter).unwrap()
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let policy = FilterPolicy::from_preset(Preset::Generic);
        let result = assemble(
            Path::new("/nonexistent/repodoc-test"),
            &policy,
            &mut NullReporter,
        );

        assert!(matches!(result, Err(RepodocError::PathNotFound(_))));
    }

    #[test]
    fn test_sections_appear_in_fixed_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("main.py"), "print('hi')\n").unwrap();

        let policy = FilterPolicy::from_preset(Preset::Generic);
        let document = generate(dir.path(), &policy);

        let header = document.find("# Project Documentation:").unwrap();
        let tree = document.find("## 📁 Folder Structure").unwrap();
        let contents = document.find("## 📄 File Contents").unwrap();

        assert!(header < tree);
        assert!(tree < contents);
    }

    #[test]
    fn test_tree_block_starts_with_root_name() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("a.txt"), "x").unwrap();

        let policy = FilterPolicy::from_preset(Preset::Base);
        let document = generate(dir.path(), &policy);

        let root = fs::canonicalize(dir.path()).unwrap();
        let name = root.file_name().unwrap().to_string_lossy();
        assert!(document.contains(&format!("```\n{name}/\n")));
    }

    #[test]
    fn test_generic_policy_scenario() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/app.py"), "x = 1\ny = 2\n").unwrap();
        fs::create_dir_all(dir.path().join("node_modules/pkg")).unwrap();
        fs::write(dir.path().join("node_modules/pkg/index.js"), "var x;\n").unwrap();
        fs::write(dir.path().join("logo.png"), [0x89, 0x50, 0x4E, 0x47, 0x00]).unwrap();
        fs::create_dir(dir.path().join("empty_out")).unwrap();

        let policy = FilterPolicy::from_preset(Preset::Generic);
        let document = generate(dir.path(), &policy);

        // Tree: empty dir marked, src listed, node_modules absent, and the
        // binary logo still appears as a leaf (tree is not binary-aware).
        assert!(document.contains("empty_out/ (empty)"));
        assert!(document.contains("src/"));
        assert!(document.contains("app.py"));
        assert!(document.contains("logo.png"));
        assert!(!document.contains("node_modules"));

        // Contents: exactly one file block, for src/app.py, tagged python.
        let headings: Vec<_> = document.match_indices("### `").collect();
        assert_eq!(headings.len(), 1);
        assert!(document.contains("### `src/app.py`"));
        assert!(document.contains("```python\nx = 1\ny = 2\n```"));
    }

    #[test]
    fn test_tree_headings_cover_collected_files() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("src")).unwrap();
        fs::write(dir.path().join("src/lib.rs"), "pub fn f() {}\n").unwrap();
        fs::write(dir.path().join("README.md"), "# readme\n").unwrap();

        let policy = FilterPolicy::from_preset(Preset::Generic);
        let document = generate(dir.path(), &policy);

        // Every file-contents heading names a leaf present in the tree.
        for (start, _) in document.match_indices("### `") {
            let rest = &document[start + 5..];
            let rel = &rest[..rest.find('`').unwrap()];
            let leaf = PathBuf::from(rel);
            let name = leaf.file_name().unwrap().to_string_lossy();
            assert!(document.contains(name.as_ref()), "{rel} missing from tree");
        }
    }

    #[test]
    fn test_zero_byte_file_round_trip() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("blank.cfg"), "").unwrap();

        let policy = FilterPolicy::from_preset(Preset::Base);
        let document = generate(dir.path(), &policy);

        assert!(document.contains("blank.cfg (empty)"));
        assert!(document.contains("```\n(empty file)\n```"));
    }

    #[test]
    fn test_content_without_trailing_newline_gets_one() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("short.txt"), "no newline").unwrap();

        let policy = FilterPolicy::from_preset(Preset::Base);
        let document = generate(dir.path(), &policy);

        assert!(document.contains("no newline\n```"));
    }

    #[test]
    fn test_unmapped_extension_block_is_untagged() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("notes.unknownext"), "hello\n").unwrap();

        let policy = FilterPolicy::from_preset(Preset::Base);
        let document = generate(dir.path(), &policy);

        assert!(document.contains("### `notes.unknownext`\n\n```\nhello\n```"));
    }
}
