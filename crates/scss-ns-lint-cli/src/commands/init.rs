//! Init command implementation.

use anyhow::{bail, Context, Result};
use std::path::Path;

const CONFIG_NAME: &str = "scss-ns-lint.toml";

const DEFAULT_CONFIG: &str = r#"# scss-ns-lint configuration

[analyzer]
# Directory to lint (default: current directory)
# root = "./src/styles"

# Directory scanned for files that define namespaced variables
# namespace_root = "./src/styles"

# Stop descending into the namespace root after this many levels
# max_depth = 8

# Glob patterns to exclude from linting
exclude = [
    "**/node_modules/**",
    "**/dist/**",
]

[rules.use-variable-pattern]
enabled = true
# severity = "error"  # Override default severity
# ignore = ["local", "global"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new(CONFIG_NAME);
    write_default(config_path, force)?;

    println!("Created {CONFIG_NAME}");
    println!("\nNext steps:");
    println!("  1. Point namespace_root at the directory holding your variable files");
    println!("  2. Run: scss-ns-lint check");
    println!("  3. Run: scss-ns-lint check --fix");

    Ok(())
}

fn write_default(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)
        .with_context(|| format!("Failed to write {}", config_path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use scss_ns_lint_core::Config;
    use tempfile::TempDir;

    #[test]
    fn default_config_parses() {
        let config = Config::parse(DEFAULT_CONFIG).unwrap();
        assert!(config.is_rule_enabled("use-variable-pattern"));
        assert_eq!(config.analyzer.exclude.len(), 2);
        assert_eq!(config.analyzer.max_depth, None);
    }

    #[test]
    fn refuses_to_overwrite_without_force() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join(CONFIG_NAME);
        std::fs::write(&path, "# mine").unwrap();

        assert!(write_default(&path, false).is_err());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "# mine");

        write_default(&path, true).unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG);
    }
}
