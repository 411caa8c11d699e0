//! Locating and loading the configuration file.
//!
//! Lookup order, first hit wins:
//!
//! 1. `--config <path>`
//! 2. `scss-ns-lint.toml`, then `.scss-ns-lint.toml`, in the linted directory
//! 3. `config.toml` in `$SCSS_NS_LINT_CONFIG_DIR` or `~/.scss-ns-lint/`
//! 4. built-in defaults

use anyhow::{Context, Result};
use scss_ns_lint_core::Config;
use std::path::{Path, PathBuf};

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Given on the command line; not checked for existence.
    Explicit(PathBuf),
    /// Found in the linted directory.
    Project(PathBuf),
    /// Found in the per-user config directory.
    Global(PathBuf),
    /// Nothing found.
    Default,
}

impl ConfigSource {
    /// Config file path, unless defaults are used.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(p) | Self::Project(p) | Self::Global(p) => Some(p),
            Self::Default => None,
        }
    }

    /// Reads and parses the config file, or returns defaults.
    pub fn load(&self) -> Result<Config> {
        let Some(path) = self.path() else {
            tracing::debug!("No config file found, using defaults");
            return Ok(Config::default());
        };

        if matches!(self, Self::Global(_)) {
            tracing::info!("Using global config: {}", path.display());
        }

        Config::from_file(path).with_context(|| format!("Failed to load config: {}", path.display()))
    }
}

const PROJECT_FILES: [&str; 2] = ["scss-ns-lint.toml", ".scss-ns-lint.toml"];

const GLOBAL_FILE: &str = "config.toml";

/// Resolves the configuration source for `project_dir`.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    resolve_in(project_dir, explicit, user_config_dir().as_deref())
}

fn resolve_in(project_dir: &Path, explicit: Option<&Path>, user_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = PROJECT_FILES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("Found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match user_dir.map(|dir| dir.join(GLOBAL_FILE)) {
        Some(candidate) if candidate.is_file() => ConfigSource::Global(candidate),
        _ => ConfigSource::Default,
    }
}

/// Per-user config directory: `$SCSS_NS_LINT_CONFIG_DIR`, else `~/.scss-ns-lint`.
#[must_use]
pub fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("SCSS_NS_LINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".scss-ns-lint")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn explicit_path_wins_without_existence_check() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join("scss-ns-lint.toml"), "").unwrap();

        let source = resolve_in(project.path(), Some(Path::new("/nowhere.toml")), None);
        assert_eq!(source, ConfigSource::Explicit(PathBuf::from("/nowhere.toml")));
    }

    #[test]
    fn plain_project_file_preferred_over_dotfile() {
        let project = TempDir::new().unwrap();
        fs::write(project.path().join(".scss-ns-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_in(project.path(), None, None),
            ConfigSource::Project(project.path().join(".scss-ns-lint.toml"))
        );

        fs::write(project.path().join("scss-ns-lint.toml"), "").unwrap();
        assert_eq!(
            resolve_in(project.path(), None, None),
            ConfigSource::Project(project.path().join("scss-ns-lint.toml"))
        );
    }

    #[test]
    fn user_dir_is_the_fallback() {
        let project = TempDir::new().unwrap();
        let user = TempDir::new().unwrap();
        assert_eq!(
            resolve_in(project.path(), None, Some(user.path())),
            ConfigSource::Default
        );

        fs::write(user.path().join("config.toml"), "").unwrap();
        assert_eq!(
            resolve_in(project.path(), None, Some(user.path())),
            ConfigSource::Global(user.path().join("config.toml"))
        );
    }

    #[test]
    fn load_defaults_and_files() {
        assert!(ConfigSource::Default.load().unwrap().rules.is_empty());

        let project = TempDir::new().unwrap();
        let path = project.path().join("scss-ns-lint.toml");
        fs::write(&path, "[rules.use-variable-pattern]\nenabled = false\n").unwrap();
        let config = ConfigSource::Project(path).load().unwrap();
        assert!(!config.is_rule_enabled("use-variable-pattern"));
    }

    #[test]
    fn load_reports_bad_toml() {
        let project = TempDir::new().unwrap();
        let path = project.path().join("scss-ns-lint.toml");
        fs::write(&path, "[analyzer\n").unwrap();
        let err = ConfigSource::Explicit(path).load().unwrap_err();
        assert!(err.to_string().starts_with("Failed to load config"));
    }
}
