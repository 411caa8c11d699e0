//! Subcommand implementations.

pub mod check;
pub mod index;
pub mod init;
pub mod list_rules;
pub mod output;

use scss_ns_lint_core::Config;
use scss_ns_lint_rules::{FileScanner, IndexBuilder, NamespaceIndex};
use std::path::{Path, PathBuf};

/// Namespace root from the command line, else from config.
fn namespace_root(flag: Option<PathBuf>, config: &Config) -> PathBuf {
    flag.unwrap_or_else(|| config.analyzer.namespace_root.clone())
}

/// Builds the namespace index honoring `analyzer.max_depth`.
fn build_index(root: &Path, config: &Config) -> NamespaceIndex {
    let mut scanner = FileScanner::new();
    if let Some(depth) = config.analyzer.max_depth {
        scanner = scanner.max_depth(depth);
    }

    IndexBuilder::new().scanner(scanner).build(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn flag_overrides_configured_namespace_root() {
        let config = Config::parse("[analyzer]\nnamespace_root = \"theme\"\n").unwrap();
        assert_eq!(namespace_root(None, &config), PathBuf::from("theme"));
        assert_eq!(
            namespace_root(Some(PathBuf::from("other")), &config),
            PathBuf::from("other")
        );
    }

    #[test]
    fn max_depth_limits_index() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("a/b")).unwrap();
        fs::write(tmp.path().join("a/near.scss"), "$near: 1;").unwrap();
        fs::write(tmp.path().join("a/b/far.scss"), "$far: 1;").unwrap();

        let shallow = Config::parse("[analyzer]\nmax_depth = 2\n").unwrap();
        let index = build_index(tmp.path(), &shallow);
        assert_eq!(index.namespace_of("$near"), Some("near"));
        assert_eq!(index.namespace_of("$far"), None);

        let index = build_index(tmp.path(), &Config::default());
        assert_eq!(index.namespace_of("$far"), Some("far"));
    }
}
