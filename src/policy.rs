//! Ignore and binary-classification policy.
//!
//! A [`FilterPolicy`] is resolved once per run from a preset plus
//! command-line overrides and never mutates afterwards. The tree
//! renderer and the file collector query the same instance, so a path
//! filtered from the tree is also absent from the collected contents.

use std::collections::HashSet;
use std::fmt;
use std::path::Path;
use std::str::FromStr;

use thiserror::Error;

/// Errors that can occur during policy resolution.
#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("unknown preset: {0}")]
    UnknownPreset(String),
}

/// Named ignore presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Empty rule sets; only command-line overrides apply.
    Base,
    /// Dependency-manager and VCS noise for arbitrary projects.
    Generic,
    /// Flutter build artifacts and IDE noise.
    Flutter,
}

impl Preset {
    /// All known presets.
    pub fn all() -> &'static [Preset] {
        &[Preset::Base, Preset::Generic, Preset::Flutter]
    }

    /// Pick a preset for a project root without prompting.
    ///
    /// A `pubspec.yaml` at the root signals a Flutter project;
    /// everything else falls back to the generic preset.
    pub fn detect(root: &Path) -> Preset {
        if root.join("pubspec.yaml").exists() {
            Preset::Flutter
        } else {
            Preset::Generic
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Base => "base",
            Preset::Generic => "generic",
            Preset::Flutter => "flutter",
        };
        f.write_str(name)
    }
}

impl FromStr for Preset {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "base" => Ok(Preset::Base),
            "generic" => Ok(Preset::Generic),
            "flutter" => Ok(Preset::Flutter),
            other => Err(PolicyError::UnknownPreset(other.to_string())),
        }
    }
}

const GENERIC_SEGMENTS: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    ".vscode",
    "dist",
    "build",
    ".next",
    "venv",
    ".venv",
    "env",
    ".env",
    "coverage",
    ".pytest_cache",
    ".DS_Store",
    "package-lock.json",
    "yarn.lock",
    "pnpm-lock.yaml",
    "bun.lock",
    ".turbo",
];

const GENERIC_EXTENSIONS: &[&str] = &[".pyc", ".pyo", ".so", ".dylib", ".exe", ".dll"];

const GENERIC_BINARY: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".ico", ".svg", ".pdf", ".zip", ".tar", ".gz", ".rar",
    ".mp4", ".mp3", ".wav", ".woff", ".woff2", ".ttf", ".eot",
];

const FLUTTER_SEGMENTS: &[&str] = &[
    // Dart / Flutter build output
    ".dart_tool",
    "build",
    ".flutter-plugins",
    ".flutter-plugins-dependencies",
    // Platform scaffolding
    ".gradle",
    "ephemeral",
    "Runner.xcodeproj",
    "Runner.xcworkspace",
    // IDE noise
    ".git",
    ".idea",
    ".vscode",
    ".DS_Store",
];

const FLUTTER_EXTENSIONS: &[&str] = &[
    ".png", ".jpg", ".jpeg", ".gif", ".svg", ".ico", ".mp4", ".mp3", ".wav", ".ttf", ".otf",
    ".woff", ".woff2", ".zip", ".rar", ".tar", ".gz", ".exe", ".dll", ".so", ".dylib",
];

fn preset_sets(preset: Preset) -> (&'static [&'static str], &'static [&'static str], &'static [&'static str]) {
    match preset {
        Preset::Base => (&[], &[], &[]),
        Preset::Generic => (GENERIC_SEGMENTS, GENERIC_EXTENSIONS, GENERIC_BINARY),
        // The Flutter preset treats every ignored asset extension as binary too.
        Preset::Flutter => (FLUTTER_SEGMENTS, FLUTTER_EXTENSIONS, FLUTTER_EXTENSIONS),
    }
}

/// Resolved ignore and binary rules for one run.
///
/// Holds three sets: ignored path segments (exact match against any
/// path component), ignored extensions, and binary extensions.
/// Extension comparisons are exact, case-sensitive matches on the last
/// dot-delimited component, so `.tar.gz` only matches `.gz` unless
/// `.gz` is listed explicitly.
#[derive(Debug, Clone)]
pub struct FilterPolicy {
    ignored_segments: HashSet<String>,
    ignored_extensions: HashSet<String>,
    binary_extensions: HashSet<String>,
}

impl FilterPolicy {
    /// Build a policy from a preset with no overrides.
    pub fn from_preset(preset: Preset) -> Self {
        Self::with_overrides(preset, &[])
    }

    /// Build a policy from a preset, folding command-line ignore
    /// overrides into the sets. An override starting with `.` joins the
    /// ignored-extension set, anything else the ignored-segment set.
    pub fn with_overrides(preset: Preset, overrides: &[String]) -> Self {
        let (segments, extensions, binaries) = preset_sets(preset);

        let mut ignored_segments: HashSet<String> =
            segments.iter().map(|s| s.to_string()).collect();
        let mut ignored_extensions: HashSet<String> =
            extensions.iter().map(|s| s.to_string()).collect();
        let binary_extensions: HashSet<String> =
            binaries.iter().map(|s| s.to_string()).collect();

        for item in overrides {
            if item.starts_with('.') {
                ignored_extensions.insert(item.clone());
            } else {
                ignored_segments.insert(item.clone());
            }
        }

        Self {
            ignored_segments,
            ignored_extensions,
            binary_extensions,
        }
    }

    /// True if any component of `path` relative to `base` equals an
    /// ignored segment, or the path's extension equals an ignored
    /// extension.
    pub fn is_ignored(&self, path: &Path, base: &Path) -> bool {
        let relative = path.strip_prefix(base).unwrap_or(path);

        for component in relative.components() {
            if let Some(name) = component.as_os_str().to_str() {
                if self.ignored_segments.contains(name) {
                    return true;
                }
            }
        }

        match extension_of(path) {
            Some(ext) => self.ignored_extensions.contains(&ext),
            None => false,
        }
    }

    /// True if the path's extension is in the binary-extension set.
    pub fn is_binary_extension(&self, path: &Path) -> bool {
        extension_of(path).is_some_and(|ext| self.binary_extensions.contains(&ext))
    }
}

/// Last dot-delimited suffix including the dot (`.gz` for `a.tar.gz`).
/// Dotfiles like `.gitignore` have no extension.
fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{e}"))
}
