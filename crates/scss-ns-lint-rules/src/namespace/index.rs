//! Variable name to namespace index.

use super::extractor::read_variables;
use super::scanner::FileScanner;
use super::{is_namespace_source, namespace_of_path};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, info};

/// Maps each variable token (e.g. `$primary`) to the namespace of the file
/// that declared it (e.g. `colors`).
///
/// Built once with [`NamespaceIndex::build`] or [`IndexBuilder`] and
/// read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct NamespaceIndex {
    variables: HashMap<String, String>,
    source_files: usize,
}

impl NamespaceIndex {
    /// Scans `root` and indexes every namespace source below it.
    #[must_use]
    pub fn build(root: &Path) -> Self {
        IndexBuilder::new().build(root)
    }

    /// Returns the namespace a variable belongs to.
    #[must_use]
    pub fn namespace_of(&self, variable: &str) -> Option<&str> {
        self.variables.get(variable).map(String::as_str)
    }

    /// Number of indexed variables.
    #[must_use]
    pub fn len(&self) -> usize {
        self.variables.len()
    }

    /// Whether no variables are indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.variables.is_empty()
    }

    /// Number of namespace source files that were read.
    #[must_use]
    pub fn source_files(&self) -> usize {
        self.source_files
    }

    /// All `(variable, namespace)` pairs, sorted by variable name.
    #[must_use]
    pub fn entries(&self) -> Vec<(&str, &str)> {
        let mut entries: Vec<(&str, &str)> = self
            .variables
            .iter()
            .map(|(k, v)| (k.as_str(), v.as_str()))
            .collect();
        entries.sort_unstable();
        entries
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for NamespaceIndex {
    /// Later pairs overwrite earlier ones.
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            variables: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            source_files: 0,
        }
    }
}

/// Incrementally folds namespace sources into a [`NamespaceIndex`].
#[derive(Debug, Default)]
pub struct IndexBuilder {
    scanner: FileScanner,
    variables: HashMap<String, String>,
    source_files: usize,
}

impl IndexBuilder {
    /// Creates a builder with an unbounded scanner.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom scanner (e.g. with a depth ceiling).
    #[must_use]
    pub fn scanner(mut self, scanner: FileScanner) -> Self {
        self.scanner = scanner;
        self
    }

    /// Assigns every variable to `namespace`, overwriting earlier assignments.
    pub fn add_source<I>(&mut self, namespace: &str, variables: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.source_files += 1;
        for variable in variables {
            self.variables.insert(variable, namespace.to_string());
        }
    }

    /// Scans `root`, folds in every qualifying file, and finishes the index.
    #[must_use]
    pub fn build(mut self, root: &Path) -> NamespaceIndex {
        for relative in self.scanner.scan(root) {
            if !is_namespace_source(&relative) {
                continue;
            }
            let Some(namespace) = namespace_of_path(&relative) else {
                continue;
            };
            let variables = read_variables(&root.join(&relative));
            debug!(
                "Namespace {} from {}: {} variable(s)",
                namespace,
                relative.display(),
                variables.len()
            );
            self.add_source(&namespace, variables);
        }

        let index = self.finish();
        info!(
            "Indexed {} variable(s) from {} namespace source(s) under {}",
            index.len(),
            index.source_files(),
            root.display()
        );
        index
    }

    /// Finishes the index.
    #[must_use]
    pub fn finish(self) -> NamespaceIndex {
        NamespaceIndex {
            variables: self.variables,
            source_files: self.source_files,
        }
    }
}
