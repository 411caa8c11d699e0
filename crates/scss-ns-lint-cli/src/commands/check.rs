//! Check command implementation.

use anyhow::{Context, Result};
use scss_ns_lint_core::Analyzer;
use scss_ns_lint_rules::configured_rules;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::config_resolver::ConfigSource;
use crate::OutputFormat;

/// Flags of the check command.
#[derive(Debug, Default)]
pub struct CheckOptions {
    /// Output format.
    pub format: OutputFormat,
    /// Rewrite files in place.
    pub fix: bool,
    /// Extra exclude patterns.
    pub exclude: Vec<String>,
    /// Overrides `analyzer.namespace_root`.
    pub namespace_root: Option<PathBuf>,
    /// Abort on unparseable stylesheets.
    pub fail_on_parse_error: bool,
}

/// Runs the check command.
pub fn run(path: &Path, options: CheckOptions, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;

    let namespace_root = super::namespace_root(options.namespace_root, &config);
    let index = Arc::new(super::build_index(&namespace_root, &config));
    let rules = configured_rules(index, &config);

    let mut builder = Analyzer::builder()
        .root(path)
        .config(config)
        .fix(options.fix)
        .fail_on_parse_error(options.fail_on_parse_error);

    for pattern in options.exclude {
        builder = builder.exclude(pattern);
    }

    for rule in rules {
        builder = builder.rule_box(rule);
    }

    let analyzer = builder.build().context("Failed to build analyzer")?;

    tracing::info!("Analyzing {:?} with {} rules", path, analyzer.rule_count());

    let result = analyzer.analyze().context("Analysis failed")?;

    super::output::print(&result, options.format, analyzer.root())?;

    if result.has_errors() {
        std::process::exit(1);
    }

    Ok(())
}
