//! Rule to enforce namespaced variables and `@use` over `@import`.
//!
//! # Rationale
//!
//! With the Sass module system, variables from another file are reached
//! through that file's namespace (`colors.$primary`), and `@import` is
//! replaced by `@use`. This rule reports references to variables that are
//! declared in a namespace source but spelled without their namespace, and
//! every `@import` directive.
//!
//! # Configuration
//!
//! - `ignore`: `"local"`, `"global"`, or a list of them. Validated, but
//!   does not change what is reported.
//!
//! # Fix mode
//!
//! `@import` is renamed to `@use` (parameters unchanged) and declaration
//! values are rewritten to their namespaced form.

use crate::formatter::Formatter;
use crate::namespace::{derive_namespace, NamespaceIndex};
use scss_ns_lint_core::{
    FileContext, Replacement, Rule, RuleConfig, Severity, Stylesheet, Suggestion, Violation,
};
use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

/// Rule code for use-variable-pattern.
pub const CODE: &str = "NS001";

/// Rule name for use-variable-pattern.
pub const NAME: &str = "use-variable-pattern";

/// Accepted values of the `ignore` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IgnoreScope {
    /// `"local"`
    Local,
    /// `"global"`
    Global,
}

impl FromStr for IgnoreScope {
    type Err = OptionsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "global" => Ok(Self::Global),
            other => Err(OptionsError::InvalidIgnore {
                value: other.to_string(),
            }),
        }
    }
}

/// Invalid rule options.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionsError {
    /// A value of `ignore` outside `local`/`global`.
    #[error(
        "Invalid option value {value:?} for \"ignore\" of rule \"use-variable-pattern\" (expected \"local\" or \"global\")"
    )]
    InvalidIgnore {
        /// The rejected value.
        value: String,
    },

    /// An option the rule does not define.
    #[error("Invalid option name {name:?} for rule \"use-variable-pattern\" (expected \"ignore\")")]
    UnknownOption {
        /// The rejected option name.
        name: String,
    },
}

/// Enforces namespaced variable references and `@use` directives.
#[derive(Debug, Clone)]
pub struct UseVariablePattern {
    index: Arc<NamespaceIndex>,
    ignore: Vec<IgnoreScope>,
    /// Severity level.
    pub severity: Severity,
}

impl UseVariablePattern {
    /// Creates the rule over a prebuilt namespace index.
    #[must_use]
    pub fn new(index: Arc<NamespaceIndex>) -> Self {
        Self {
            index,
            ignore: Vec::new(),
            severity: Severity::Error,
        }
    }

    /// Creates the rule from its configuration table.
    ///
    /// # Errors
    ///
    /// Returns an error for options other than `ignore`, or if `ignore`
    /// holds anything but `local`/`global`.
    pub fn from_config(index: Arc<NamespaceIndex>, config: &RuleConfig) -> Result<Self, OptionsError> {
        if let Some(name) = config.option_names().into_iter().find(|name| *name != "ignore") {
            return Err(OptionsError::UnknownOption {
                name: name.to_string(),
            });
        }

        let ignore = config
            .get_str_list("ignore")
            .map_err(|value| OptionsError::InvalidIgnore { value })?
            .iter()
            .map(|s| s.parse())
            .collect::<Result<Vec<IgnoreScope>, _>>()?;

        Ok(Self::new(index).ignore(ignore))
    }

    /// Sets the `ignore` option.
    #[must_use]
    pub fn ignore(mut self, scopes: Vec<IgnoreScope>) -> Self {
        self.ignore = scopes;
        self
    }

    /// Sets the severity level.
    #[must_use]
    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// The configured `ignore` scopes.
    #[must_use]
    pub fn ignored_scopes(&self) -> &[IgnoreScope] {
        &self.ignore
    }

    /// The namespace index this rule resolves against.
    #[must_use]
    pub fn index(&self) -> &NamespaceIndex {
        &self.index
    }

    fn check_at_rules(&self, ctx: &FileContext, sheet: &mut Stylesheet) -> Vec<Violation> {
        let imported = imported_namespaces(sheet);
        if !imported.is_empty() {
            debug!(
                "{} imports namespaces {:?}",
                ctx.relative_path.display(),
                imported
            );
        }

        let mut violations = Vec::new();
        sheet.walk_at_rules_mut(|at_rule| {
            if at_rule.name != "import" {
                return;
            }

            if ctx.fix {
                at_rule.name = "use".to_string();
                return;
            }

            let replacement = Replacement::new(ctx.location_at(at_rule.name_span()), "use");
            violations.push(
                Violation::new(
                    CODE,
                    NAME,
                    self.severity,
                    ctx.location_at(at_rule.span()),
                    expected_message(
                        &format!("@import {}", at_rule.params),
                        &format!("@use {}", at_rule.params),
                    ),
                )
                .with_suggestion(Suggestion::with_fix(
                    "Replace @import with @use",
                    replacement,
                )),
            );
        });
        violations
    }

    fn check_declarations(&self, ctx: &FileContext, sheet: &mut Stylesheet) -> Vec<Violation> {
        let formatter = Formatter::new(&self.index);
        let mut violations = Vec::new();

        sheet.walk_declarations_mut(|decl| {
            let expected = formatter.format_value(&decl.value);
            if expected == decl.value {
                return;
            }

            if ctx.fix {
                decl.value = expected;
                return;
            }

            let message = expected_message(
                &format!("{}: {}", decl.prop, decl.value),
                &format!("{}: {}", decl.prop, expected),
            );
            let replacement = Replacement::new(ctx.location_at(decl.value_span()), expected);
            violations.push(
                Violation::new(CODE, NAME, self.severity, ctx.location_at(decl.span()), message)
                    .with_suggestion(Suggestion::with_fix(
                        "Reference the variable through its namespace",
                        replacement,
                    )),
            );
        });
        violations
    }
}

impl Rule for UseVariablePattern {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires namespaced variable references and @use instead of @import"
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn check(&self, ctx: &FileContext, sheet: &mut Stylesheet) -> Vec<Violation> {
        let mut violations = self.check_at_rules(ctx, sheet);
        violations.extend(self.check_declarations(ctx, sheet));
        violations
    }
}

/// Namespaces of every `@import "..."` / `@use "..."` with a double-quoted path.
#[must_use]
pub fn imported_namespaces(sheet: &Stylesheet) -> BTreeSet<String> {
    sheet
        .at_rules()
        .into_iter()
        .filter(|at_rule| at_rule.name == "import" || at_rule.name == "use")
        .filter_map(|at_rule| at_rule.quoted_params())
        .map(|path| derive_namespace(path).to_string())
        .collect()
}

/// `Expected "<unfixed>" to be "<fixed>"`, with inner double quotes shown as single quotes.
#[must_use]
pub fn expected_message(unfixed: &str, fixed: &str) -> String {
    format!(
        "Expected \"{}\" to be \"{}\"",
        unfixed.replace('"', "'"),
        fixed.replace('"', "'")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use scss_ns_lint_core::stylesheet::parse;
    use std::path::{Path, PathBuf};

    fn index() -> Arc<NamespaceIndex> {
        Arc::new(
            [("$primary", "colors"), ("$gap", "spacing")]
                .into_iter()
                .collect(),
        )
    }

    fn run(code: &str, fix: bool) -> (Vec<Violation>, Stylesheet) {
        let mut sheet = parse(code).expect("Failed to parse");
        let ctx = FileContext {
            path: Path::new("test.scss"),
            content: code,
            relative_path: PathBuf::from("test.scss"),
            fix,
        };
        let violations = UseVariablePattern::new(index()).check(&ctx, &mut sheet);
        (violations, sheet)
    }

    #[test]
    fn test_reports_unqualified_variable() {
        let (violations, sheet) = run("a {\n  color: $primary;\n}\n", false);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code, CODE);
        insta::assert_snapshot!(
            violations[0].message,
            @r#"Expected "color: $primary" to be "color: colors.$primary""#
        );
        assert_eq!(violations[0].location.line, 2);
        assert_eq!(violations[0].location.column, 3);
        assert!(violations[0].is_fixable());
        assert!(!sheet.is_modified());
    }

    #[test]
    fn test_reports_import_with_single_quotes_in_message() {
        let (violations, sheet) = run("@import \"foo\";\n", false);
        assert_eq!(violations.len(), 1);
        insta::assert_snapshot!(
            violations[0].message,
            @r#"Expected "@import 'foo'" to be "@use 'foo'""#
        );
        assert_eq!(sheet.at_rules()[0].name, "import");
    }

    #[test]
    fn test_fix_renames_import_keeping_params() {
        let (violations, sheet) = run("@import \"foo\";\n@use \"bar\";\n@media print {}\n", true);
        assert!(violations.is_empty());
        let at_rules = sheet.at_rules();
        assert_eq!(at_rules[0].name, "use");
        assert_eq!(at_rules[0].params, "\"foo\"");
        assert_eq!(at_rules[1].name, "use");
        assert_eq!(at_rules[2].name, "media");
        assert_eq!(
            sheet.render(),
            "@use \"foo\";\n@use \"bar\";\n@media print {}\n"
        );
    }

    #[test]
    fn test_fix_rewrites_declaration_value() {
        let (violations, sheet) = run("a { margin: $gap auto; color: red; }", true);
        assert!(violations.is_empty());
        assert_eq!(
            sheet.render(),
            "a { margin: spacing.$gap auto; color: red; }"
        );
    }

    #[test]
    fn test_unknown_variable_is_ignored() {
        let (violations, sheet) = run("a { width: $unknownVar; }", false);
        assert!(violations.is_empty());
        let (_, fixed) = run("a { width: $unknownVar; }", true);
        assert!(!sheet.is_modified());
        assert!(!fixed.is_modified());
    }

    #[test]
    fn test_use_and_other_at_rules_are_not_reported() {
        let (violations, _) = run("@use \"colors\";\n@forward \"x\";\n@media print {}", false);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_already_namespaced_value_passes() {
        let (violations, _) = run("a { color: colors.$primary; }", false);
        assert!(violations.is_empty());
    }

    #[test]
    fn test_nested_declarations_are_checked() {
        let (violations, _) = run(".a { .b { @media print { gap: $gap; } } }", false);
        assert_eq!(violations.len(), 1);
        assert_eq!(
            violations[0].message,
            "Expected \"gap: $gap\" to be \"gap: spacing.$gap\""
        );
    }

    #[test]
    fn test_important_flag_stays_out_of_message() {
        let (violations, _) = run("a { color: $primary !important; }", false);
        insta::assert_snapshot!(
            violations[0].message,
            @r#"Expected "color: $primary" to be "color: colors.$primary""#
        );

        let (_, sheet) = run("a { color: $primary !important; }", true);
        assert_eq!(sheet.render(), "a { color: colors.$primary !important; }");
    }

    #[test]
    fn test_declaration_quotes_are_normalized() {
        let (violations, _) = run("a { font: \"Inter\" $gap; }", false);
        assert_eq!(
            violations[0].message,
            "Expected \"font: 'Inter' $gap\" to be \"font: 'Inter' spacing.$gap\""
        );
    }

    #[test]
    fn test_imported_namespaces() {
        let sheet = parse(
            "@import \"theme/colors.scss\";\n@use \"spacing\";\n@use 'single';\n@media x {}",
        )
        .expect("parse");
        let namespaces: Vec<String> = imported_namespaces(&sheet).into_iter().collect();
        assert_eq!(namespaces, vec!["colors", "spacing"]);
    }

    #[test]
    fn test_from_config_accepts_valid_ignore() {
        let config = scss_ns_lint_core::Config::parse(
            "[rules.use-variable-pattern]\nignore = [\"local\", \"global\"]\n",
        )
        .expect("config");
        let rule = UseVariablePattern::from_config(index(), &config.rule(NAME)).expect("valid");
        assert_eq!(
            rule.ignored_scopes(),
            &[IgnoreScope::Local, IgnoreScope::Global]
        );
    }

    #[test]
    fn test_from_config_rejects_invalid_ignore() {
        let config =
            scss_ns_lint_core::Config::parse("[rules.use-variable-pattern]\nignore = \"none\"\n")
                .expect("config");
        let err = UseVariablePattern::from_config(index(), &config.rule(NAME)).unwrap_err();
        assert_eq!(
            err,
            OptionsError::InvalidIgnore {
                value: "none".to_string()
            }
        );
    }

    #[test]
    fn test_from_config_rejects_unknown_option() {
        let config = scss_ns_lint_core::Config::parse(
            "[rules.use-variable-pattern]\nseverity = \"warning\"\nignroe = \"local\"\n",
        )
        .expect("config");
        let err = UseVariablePattern::from_config(index(), &config.rule(NAME)).unwrap_err();
        assert_eq!(
            err,
            OptionsError::UnknownOption {
                name: "ignroe".to_string()
            }
        );
    }

    #[test]
    fn test_ignore_option_does_not_change_reports() {
        let code = "a { color: $primary; }";
        let mut sheet = parse(code).expect("parse");
        let ctx = FileContext {
            path: Path::new("test.scss"),
            content: code,
            relative_path: PathBuf::from("test.scss"),
            fix: false,
        };
        let violations = UseVariablePattern::new(index())
            .ignore(vec![IgnoreScope::Global])
            .check(&ctx, &mut sheet);
        assert_eq!(violations.len(), 1);
    }
}
