//! Repodoc - generate a single markdown document for a whole project.
//!
//! Repodoc walks a project directory, renders its structure as a tree,
//! and embeds the contents of every non-ignored, non-binary file into
//! one markdown document with per-file language tags.
//!
//! # Quick Start
//!
//! ```no_run
//! use repodoc::policy::{FilterPolicy, Preset};
//! use repodoc::report::NullReporter;
//! use std::path::Path;
//!
//! let policy = FilterPolicy::from_preset(Preset::Generic);
//! let document = repodoc::document::assemble(
//!     Path::new("./my-project"),
//!     &policy,
//!     &mut NullReporter,
//! )
//! .unwrap();
//!
//! println!("{document}");
//! ```
//!
//! # Modules
//!
//! - [`policy`] - Ignore/binary rule sets and preset resolution
//! - [`tree`] - Directory tree rendering
//! - [`collector`] - File collection with binary sniffing
//! - [`content`] - File content reading and language tagging
//! - [`document`] - Final document assembly
//! - [`report`] - Advisory status callbacks

pub mod policy;
pub mod errors;
pub mod tree;
pub mod collector;
pub mod content;
pub mod report;
pub mod document;

// Re-export key types at crate root for convenience
pub use collector::collect_files;
pub use content::{language_tag, read_content};
pub use document::assemble;
pub use errors::RepodocError;
pub use policy::{FilterPolicy, PolicyError, Preset};
pub use report::{LogReporter, NullReporter, Reporter};
pub use tree::render_tree;
