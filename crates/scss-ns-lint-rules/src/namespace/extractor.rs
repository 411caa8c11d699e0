//! Variable token extraction.

use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tracing::warn;

static VARIABLE: OnceLock<Regex> = OnceLock::new();

#[allow(clippy::expect_used)] // literal pattern
fn variable_pattern() -> &'static Regex {
    VARIABLE.get_or_init(|| Regex::new(r"\$[A-Za-z0-9]+").expect("valid regex"))
}

/// Returns every `$name` token in `content`, in source order, duplicates included.
#[must_use]
pub fn extract_variables(content: &str) -> Vec<String> {
    variable_pattern()
        .find_iter(content)
        .map(|m| m.as_str().to_string())
        .collect()
}

/// Reads a file and extracts its variable tokens.
///
/// A file that cannot be read is logged and contributes no tokens.
#[must_use]
pub fn read_variables(path: &Path) -> Vec<String> {
    match std::fs::read_to_string(path) {
        Ok(content) => extract_variables(&content),
        Err(err) => {
            warn!("Failed to read {}: {}", path.display(), err);
            Vec::new()
        }
    }
}
