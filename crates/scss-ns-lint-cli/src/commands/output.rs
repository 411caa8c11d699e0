//! Shared output formatting for lint results.

use anyhow::Result;
use miette::{NamedSource, Report};
use scss_ns_lint_core::{LintResult, Severity, Violation, ViolationDiagnostic};
use std::path::Path;

use crate::OutputFormat;

/// Print lint results in the specified format.
///
/// `root` is the analyzed directory; violation paths are relative to it.
pub fn print(result: &LintResult, format: OutputFormat, root: &Path) -> Result<()> {
    match format {
        OutputFormat::Text => print_text(result),
        OutputFormat::Json => return print_json(result),
        OutputFormat::Compact => {
            for line in compact_lines(result) {
                println!("{line}");
            }
        }
        OutputFormat::Pretty => print_pretty(result, root),
    }
    Ok(())
}

fn print_text(result: &LintResult) {
    for violation in &result.violations {
        let severity_indicator = match violation.severity {
            Severity::Error => "\x1b[31merror\x1b[0m",
            Severity::Warning => "\x1b[33mwarning\x1b[0m",
            Severity::Info => "\x1b[34minfo\x1b[0m",
        };

        println!(
            "{} {} at {}:{}:{}",
            violation.code,
            violation.rule,
            violation.location.file.display(),
            violation.location.line,
            violation.location.column,
        );
        println!("  {}: {}", severity_indicator, violation.message);
        if let Some(suggestion) = &violation.suggestion {
            println!("  = help: {}", suggestion.message);
        }
        println!();
    }

    print_summary(result);
}

fn print_pretty(result: &LintResult, root: &Path) {
    for violation in &result.violations {
        println!("{:?}", pretty_report(violation, root));
    }

    print_summary(result);
}

/// Wraps a violation in a miette report carrying its file's source.
fn pretty_report(violation: &Violation, root: &Path) -> Report {
    let file = &violation.location.file;
    let report = Report::new(ViolationDiagnostic::from(violation));

    match std::fs::read_to_string(root.join(file)) {
        Ok(source) => report.with_source_code(NamedSource::new(file.display().to_string(), source)),
        Err(e) => {
            tracing::debug!("No source snippet for {}: {}", file.display(), e);
            report
        }
    }
}

fn print_summary(result: &LintResult) {
    let (errors, warnings, infos) = result.count_by_severity();

    let summary_color = if errors > 0 {
        "\x1b[31m"
    } else if warnings > 0 {
        "\x1b[33m"
    } else {
        "\x1b[32m"
    };

    if result.files_fixed > 0 {
        println!("\x1b[32mFixed {} file(s)\x1b[0m", result.files_fixed);
    }

    println!(
        "{}Found {} error(s), {} warning(s), {} info(s) in {} file(s)\x1b[0m",
        summary_color, errors, warnings, infos, result.files_checked
    );

    if let Some(hint) = fix_hint(result) {
        println!("{hint}");
    }
}

fn fix_hint(result: &LintResult) -> Option<String> {
    match result.fixable_count() {
        0 => None,
        n => Some(format!("{n} violation(s) can be fixed with --fix")),
    }
}

fn print_json(result: &LintResult) -> Result<()> {
    let json = serde_json::to_string_pretty(result)?;
    println!("{json}");
    Ok(())
}

fn compact_lines(result: &LintResult) -> Vec<String> {
    result.violations.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use scss_ns_lint_core::{Location, Replacement, Suggestion};
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn sample() -> LintResult {
        let location = Location::new(PathBuf::from("styles/_main.scss"), 2, 3).with_span(20, 14);
        let fix = Suggestion::with_fix(
            "Use the namespaced form",
            Replacement::new(location.clone(), "colors.$primary"),
        );
        let violation = Violation::new(
            "NS001",
            "use-variable-pattern",
            Severity::Warning,
            location,
            "Expected \"color: $primary\" to be \"color: colors.$primary\"",
        )
        .with_suggestion(fix);

        LintResult {
            violations: vec![violation],
            files_checked: 3,
            files_fixed: 0,
        }
    }

    #[test]
    fn compact_is_one_line_per_violation() {
        assert_eq!(
            compact_lines(&sample()),
            vec![
                "styles/_main.scss:2:3: warning [NS001] Expected \"color: $primary\" to be \"color: colors.$primary\""
                    .to_string()
            ]
        );
    }

    #[test]
    fn hint_counts_fixable_violations() {
        assert_eq!(
            fix_hint(&sample()).as_deref(),
            Some("1 violation(s) can be fixed with --fix")
        );
        assert_eq!(fix_hint(&LintResult::default()), None);
    }

    #[test]
    fn pretty_report_survives_missing_source() {
        let tmp = TempDir::new().unwrap();
        let result = sample();
        let rendered = format!("{:?}", pretty_report(&result.violations[0], tmp.path()));
        assert!(rendered.contains("[NS001]"));
    }
}
