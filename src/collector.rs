//! File collection for content embedding.
//!
//! Walks the same root as the tree renderer with the same policy, but
//! in plain lexicographic name order, and additionally drops files the
//! binary sniff classifies as non-text. The two orderings are
//! intentionally independent.

use std::fs::{self, File};
use std::io::Read;
use std::path::{Path, PathBuf};

use log::debug;

use crate::policy::FilterPolicy;

/// Number of leading bytes sampled by the null-byte sniff.
const SNIFF_LEN: usize = 1024;

/// Heuristic binary classification.
///
/// A listed binary extension classifies without reading content.
/// Otherwise the first 1024 bytes are sampled; a read failure or a null
/// byte anywhere in the sample classifies the file as binary. Text
/// files with embedded nulls are misclassified on purpose, and binary
/// files whose leading bytes avoid nulls slip through.
pub fn is_binary(path: &Path, policy: &FilterPolicy) -> bool {
    if policy.is_binary_extension(path) {
        return true;
    }

    let mut sample = [0u8; SNIFF_LEN];
    let read = File::open(path).and_then(|mut file| file.read(&mut sample));
    match read {
        Ok(n) => sample[..n].contains(&0),
        Err(err) => {
            debug!("sniff failed for {}, treating as binary: {err}", path.display());
            true
        }
    }
}

/// Collect every non-ignored, non-binary file under `directory`,
/// depth-first in ascending name order. Unreadable directories yield
/// nothing; the walk never fails.
pub fn collect_files(directory: &Path, base: &Path, policy: &FilterPolicy) -> Vec<PathBuf> {
    let mut files = Vec::new();
    collect_into(directory, base, policy, &mut files);
    files
}

fn collect_into(directory: &Path, base: &Path, policy: &FilterPolicy, files: &mut Vec<PathBuf>) {
    let read = match fs::read_dir(directory) {
        Ok(read) => read,
        Err(err) => {
            debug!("skipping unreadable directory {}: {err}", directory.display());
            return;
        }
    };

    let mut names: Vec<_> = read.flatten().map(|entry| entry.file_name()).collect();
    names.sort();

    for name in names {
        let path = directory.join(&name);
        if policy.is_ignored(&path, base) {
            continue;
        }
        let Ok(metadata) = fs::metadata(&path) else {
            continue;
        };

        if metadata.is_file() {
            if !is_binary(&path, policy) {
                files.push(path);
            }
        } else if metadata.is_dir() {
            collect_into(&path, base, policy, files);
        }
    }
}
