//! Rule sets built over a namespace index.

use crate::namespace::NamespaceIndex;
use crate::use_variable_pattern::UseVariablePattern;
use scss_ns_lint_core::{Config, RuleBox};
use std::sync::Arc;
use tracing::warn;

/// Returns all available rules with default options.
#[must_use]
pub fn all_rules(index: Arc<NamespaceIndex>) -> Vec<RuleBox> {
    vec![Box::new(UseVariablePattern::new(index))]
}

/// Returns the rules configured by `config`.
///
/// A rule whose options fail validation is logged and left out, so it
/// neither walks nor reports anything for this run.
#[must_use]
pub fn configured_rules(index: Arc<NamespaceIndex>, config: &Config) -> Vec<RuleBox> {
    let mut rules: Vec<RuleBox> = Vec::new();

    match UseVariablePattern::from_config(index, &config.rule(crate::use_variable_pattern::NAME)) {
        Ok(rule) => rules.push(Box::new(rule)),
        Err(e) => warn!("{e}"),
    }

    rules
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_rules() {
        let rules = all_rules(Arc::new(NamespaceIndex::default()));
        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].code(), "NS001");
    }

    #[test]
    fn test_configured_rules_drop_invalid_options() {
        let index = Arc::new(NamespaceIndex::default());

        let valid = Config::parse("[rules.use-variable-pattern]\nignore = \"local\"\n")
            .expect("config");
        assert_eq!(configured_rules(Arc::clone(&index), &valid).len(), 1);

        let invalid = Config::parse("[rules.use-variable-pattern]\nignore = [\"everything\"]\n")
            .expect("config");
        assert!(configured_rules(index, &invalid).is_empty());
    }

    #[test]
    fn test_configured_rules_drop_unknown_option() {
        let index = Arc::new(NamespaceIndex::default());
        let typo = Config::parse("[rules.use-variable-pattern]\nignroe = \"local\"\n")
            .expect("config");
        assert!(configured_rules(index, &typo).is_empty());
    }
}
