//! List rules command implementation.

use scss_ns_lint_rules::{all_rules, NamespaceIndex};
use std::sync::Arc;

/// Runs the list-rules command.
pub fn run() {
    println!("Available rules:\n");
    println!("{:<10} {:<25} {:<10} Description", "Code", "Name", "Severity");
    println!("{}", "-".repeat(90));

    for rule in all_rules(Arc::new(NamespaceIndex::default())) {
        println!(
            "{:<10} {:<25} {:<10} {}",
            rule.code(),
            rule.name(),
            rule.default_severity().to_string(),
            rule.description()
        );
    }

    println!("\nConfigure rules in scss-ns-lint.toml, e.g.:");
    println!("  [rules.use-variable-pattern]");
    println!("  severity = \"error\"");
    println!("  ignore = [\"local\"]");
}
