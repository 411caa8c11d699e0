//! Index command implementation.

use anyhow::Result;
use scss_ns_lint_rules::NamespaceIndex;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config_resolver::ConfigSource;
use crate::IndexFormat;

/// Runs the index command.
pub fn run(namespace_root: Option<PathBuf>, format: IndexFormat, source: &ConfigSource) -> Result<()> {
    let config = source.load()?;
    let root = super::namespace_root(namespace_root, &config);
    let index = super::build_index(&root, &config);

    match format {
        IndexFormat::Text => print!("{}", render_text(&index)),
        IndexFormat::Json => println!("{}", render_json(&index)?),
    }
    Ok(())
}

fn render_text(index: &NamespaceIndex) -> String {
    let entries = index.entries();
    let width = entries.iter().map(|(var, _)| var.len()).max().unwrap_or(0);

    let mut lines: Vec<String> = entries
        .iter()
        .map(|(variable, namespace)| format!("{variable:<width$}  {namespace}"))
        .collect();
    lines.push(String::new());
    lines.push(format!(
        "{} variable(s) from {} file(s)",
        index.len(),
        index.source_files()
    ));
    lines.join("\n") + "\n"
}

fn render_json(index: &NamespaceIndex) -> Result<String> {
    let map: BTreeMap<&str, &str> = index.entries().into_iter().collect();
    Ok(serde_json::to_string_pretty(&map)?)
}
