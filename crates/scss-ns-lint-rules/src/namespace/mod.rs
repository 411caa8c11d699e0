//! Namespace resolution.
//!
//! A *namespace source* is an SCSS file below at least one directory whose
//! name is letters only plus `.scss` (e.g. `styles/colors.scss`). Every
//! variable token found in such a file is assigned the file's stem as its
//! namespace, so `$primary` from `styles/colors.scss` should be spelled
//! `colors.$primary` elsewhere.

mod extractor;
mod index;
mod scanner;

pub use extractor::{extract_variables, read_variables};
pub use index::{IndexBuilder, NamespaceIndex};
pub use scanner::FileScanner;

use std::path::Path;

/// Derives a namespace from a `/`-separated path: the file name up to its
/// first `.`.
///
/// ```
/// use scss_ns_lint_rules::namespace::derive_namespace;
///
/// assert_eq!(derive_namespace("styles/colors.scss"), "colors");
/// assert_eq!(derive_namespace("theme.dark.scss"), "theme");
/// assert_eq!(derive_namespace("tokens"), "tokens");
/// ```
#[must_use]
pub fn derive_namespace(path: &str) -> &str {
    let file_name = path.rsplit('/').next().unwrap_or(path);
    file_name.split('.').next().unwrap_or(file_name)
}

/// Derives the namespace of a file path.
#[must_use]
pub fn namespace_of_path(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    Some(derive_namespace(file_name).to_string())
}

/// Whether a path relative to the scan root names a namespace source.
#[must_use]
pub fn is_namespace_source(relative: &Path) -> bool {
    let has_parent = relative
        .parent()
        .is_some_and(|parent| !parent.as_os_str().is_empty());
    let Some(stem) = relative
        .file_name()
        .and_then(|name| name.to_str())
        .and_then(|name| name.strip_suffix(".scss"))
    else {
        return false;
    };

    has_parent && !stem.is_empty() && stem.bytes().all(|b| b.is_ascii_alphabetic())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_derive_namespace() {
        assert_eq!(derive_namespace("a/b/colors.scss"), "colors");
        assert_eq!(derive_namespace("colors"), "colors");
        assert_eq!(derive_namespace("../vendor/grid.min.scss"), "grid");
        assert_eq!(derive_namespace("dir/"), "");
    }

    #[test]
    fn test_namespace_of_path() {
        assert_eq!(
            namespace_of_path(Path::new("styles/spacing.scss")),
            Some("spacing".to_string())
        );
        assert_eq!(namespace_of_path(Path::new("")), None);
    }

    #[test]
    fn test_is_namespace_source() {
        assert!(is_namespace_source(Path::new("styles/colors.scss")));
        assert!(is_namespace_source(Path::new("a/b/Theme.scss")));

        assert!(!is_namespace_source(Path::new("colors.scss")));
        assert!(!is_namespace_source(Path::new("styles/_colors.scss")));
        assert!(!is_namespace_source(Path::new("styles/colors2.scss")));
        assert!(!is_namespace_source(Path::new("styles/dark-theme.scss")));
        assert!(!is_namespace_source(Path::new("styles/colors.css")));
        assert!(!is_namespace_source(Path::new("styles/.scss")));
    }
}
