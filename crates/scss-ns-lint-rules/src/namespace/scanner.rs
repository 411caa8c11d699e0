//! Recursive enumeration of candidate namespace source files.

use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Lists every regular file below a root directory.
///
/// Symbolic links are followed. A directory whose canonical path was already
/// entered is skipped, so link cycles terminate. Entries are visited in
/// file-name order within each directory.
#[derive(Debug, Clone, Default)]
pub struct FileScanner {
    max_depth: Option<usize>,
}

impl FileScanner {
    /// Creates a scanner without a depth ceiling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Limits how many directory levels below the root are entered.
    ///
    /// Files directly in the root are at depth 1.
    #[must_use]
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Returns all files below `root`, relative to `root`.
    #[must_use]
    pub fn scan(&self, root: &Path) -> Vec<PathBuf> {
        let mut visited: HashSet<PathBuf> = HashSet::new();
        if let Ok(canonical) = root.canonicalize() {
            visited.insert(canonical);
        }

        let mut walker = WalkDir::new(root)
            .follow_links(true)
            .sort_by_file_name()
            .min_depth(1);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let entries = walker.into_iter().filter_entry(move |entry| {
            if entry.depth() == 0 || !entry.file_type().is_dir() {
                return true;
            }
            match entry.path().canonicalize() {
                Ok(canonical) => {
                    let first_visit = visited.insert(canonical);
                    if !first_visit {
                        debug!("Skipping already visited directory {}", entry.path().display());
                    }
                    first_visit
                }
                Err(_) => true,
            }
        });

        let mut files = Vec::new();
        for entry in entries {
            match entry {
                Ok(entry) if entry.file_type().is_file() => {
                    let relative = entry
                        .path()
                        .strip_prefix(root)
                        .unwrap_or_else(|_| entry.path());
                    files.push(relative.to_path_buf());
                }
                Ok(_) => {}
                Err(err) => warn!("Skipping unreadable entry: {err}"),
            }
        }

        files
    }
}
