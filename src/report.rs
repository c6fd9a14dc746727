//! Advisory status callbacks for document generation.
//!
//! The assembler notifies a [`Reporter`] as it works; reporters never
//! influence document content.

use std::path::Path;

use log::info;

/// Receives progress events from the document assembler.
///
/// All methods default to no-ops, so implementors override only what
/// they care about.
pub trait Reporter {
    fn tree_started(&mut self) {}
    fn tree_finished(&mut self) {}
    fn collect_started(&mut self) {}
    fn collect_finished(&mut self, _count: usize) {}
    /// Called per collected file with a 1-based index.
    fn file_processed(&mut self, _index: usize, _total: usize, _path: &Path) {}
}

/// Reporter that discards every event.
#[derive(Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {}

/// Reporter that forwards events to the `log` facade.
#[derive(Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn tree_started(&mut self) {
        info!("generating folder structure");
    }

    fn tree_finished(&mut self) {
        info!("folder structure generated");
    }

    fn collect_started(&mut self) {
        info!("collecting files");
    }

    fn collect_finished(&mut self, count: usize) {
        info!("collected {count} files");
    }

    fn file_processed(&mut self, index: usize, total: usize, path: &Path) {
        info!("processing ({index}/{total}): {}", path.display());
    }
}
