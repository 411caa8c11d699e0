//! Minimal SCSS statement tree.
//!
//! The reader in [`parser`] only splits a stylesheet into at-rules, rule
//! blocks and declarations; selectors, parameters and values are kept as raw
//! text. Every node remembers where its editable parts came from so that
//! [`Stylesheet::render`] can splice changes back into the original source
//! without touching anything else.

mod parser;

pub use parser::{parse, ParseError};

use std::ops::Range;

/// A parsed stylesheet together with its original source text.
#[derive(Debug, Clone)]
pub struct Stylesheet {
    source: String,
    nodes: Vec<Node>,
}

/// A single statement in a stylesheet.
#[derive(Debug, Clone)]
pub enum Node {
    /// `@name params;` or `@name params { ... }`.
    AtRule(AtRule),
    /// `selector { ... }`.
    Rule(RuleBlock),
    /// `prop: value;`.
    Declaration(Declaration),
}

/// An at-rule such as `@import "colors";` or `@media print { ... }`.
#[derive(Debug, Clone)]
pub struct AtRule {
    /// Directive name without the leading `@`.
    pub name: String,
    /// Raw parameter text, trimmed.
    pub params: String,
    /// Child statements, if the at-rule has a block.
    pub nodes: Option<Vec<Node>>,
    span: Range<usize>,
    name_span: Range<usize>,
    params_span: Range<usize>,
    original_name: String,
    original_params: String,
}

/// A rule block: a selector followed by a block of statements.
#[derive(Debug, Clone)]
pub struct RuleBlock {
    /// Raw selector text, trimmed.
    pub selector: String,
    /// Child statements.
    pub nodes: Vec<Node>,
    span: Range<usize>,
}

/// A property/value pair.
#[derive(Debug, Clone)]
pub struct Declaration {
    /// Property name (for SCSS variable definitions this is `$name`).
    pub prop: String,
    /// Raw value text, trimmed, without a trailing `!important`.
    pub value: String,
    /// Whether the declaration ends in `!important`.
    pub important: bool,
    span: Range<usize>,
    value_span: Range<usize>,
    original_value: String,
}

impl AtRule {
    fn new(
        source: &str,
        span: Range<usize>,
        name_span: Range<usize>,
        params_span: Range<usize>,
        nodes: Option<Vec<Node>>,
    ) -> Self {
        let name = source[name_span.clone()].to_string();
        let params = source[params_span.clone()].to_string();
        Self {
            original_name: name.clone(),
            original_params: params.clone(),
            name,
            params,
            nodes,
            span,
            name_span,
            params_span,
        }
    }

    /// Byte range of the whole statement in the original source.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Byte range of the directive name (without `@`).
    #[must_use]
    pub fn name_span(&self) -> Range<usize> {
        self.name_span.clone()
    }

    /// Byte range of the parameters.
    #[must_use]
    pub fn params_span(&self) -> Range<usize> {
        self.params_span.clone()
    }

    /// Returns the parameters with surrounding double quotes removed, if the
    /// parameters are a single double-quoted string.
    #[must_use]
    pub fn quoted_params(&self) -> Option<&str> {
        let inner = self.params.strip_prefix('"')?.strip_suffix('"')?;
        (!inner.is_empty() && !inner.contains('"')).then_some(inner)
    }

    /// Whether the name or parameters differ from the source text.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.name != self.original_name || self.params != self.original_params
    }
}

impl RuleBlock {
    /// Byte range of the whole rule in the original source.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }
}

impl Declaration {
    fn new(
        source: &str,
        span: Range<usize>,
        prop: &str,
        value_span: Range<usize>,
        important: bool,
    ) -> Self {
        let value = source[value_span.clone()].to_string();
        Self {
            prop: prop.to_string(),
            original_value: value.clone(),
            value,
            important,
            span,
            value_span,
        }
    }

    /// Byte range of the whole declaration, flag included, without the trailing `;`.
    #[must_use]
    pub fn span(&self) -> Range<usize> {
        self.span.clone()
    }

    /// Byte range of the value.
    #[must_use]
    pub fn value_span(&self) -> Range<usize> {
        self.value_span.clone()
    }

    /// Whether the value differs from the source text.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.value != self.original_value
    }
}

impl Stylesheet {
    /// Original source text.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Top-level statements.
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Visits every at-rule, depth-first in source order.
    pub fn walk_at_rules_mut<F: FnMut(&mut AtRule)>(&mut self, mut f: F) {
        walk_mut(&mut self.nodes, &mut |node| {
            if let Node::AtRule(at_rule) = node {
                f(at_rule);
            }
        });
    }

    /// Visits every declaration, depth-first in source order.
    pub fn walk_declarations_mut<F: FnMut(&mut Declaration)>(&mut self, mut f: F) {
        walk_mut(&mut self.nodes, &mut |node| {
            if let Node::Declaration(decl) = node {
                f(decl);
            }
        });
    }

    /// All at-rules, depth-first in source order.
    #[must_use]
    pub fn at_rules(&self) -> Vec<&AtRule> {
        let mut out = Vec::new();
        walk(&self.nodes, &mut |node| {
            if let Node::AtRule(at_rule) = node {
                out.push(at_rule);
            }
        });
        out
    }

    /// All declarations, depth-first in source order.
    #[must_use]
    pub fn declarations(&self) -> Vec<&Declaration> {
        let mut out = Vec::new();
        walk(&self.nodes, &mut |node| {
            if let Node::Declaration(decl) = node {
                out.push(decl);
            }
        });
        out
    }

    /// Whether any node was changed since parsing.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        let mut modified = false;
        walk(&self.nodes, &mut |node| match node {
            Node::AtRule(at_rule) => modified |= at_rule.is_modified(),
            Node::Declaration(decl) => modified |= decl.is_modified(),
            Node::Rule(_) => {}
        });
        modified
    }

    /// Renders the stylesheet back to text.
    ///
    /// Unchanged nodes are reproduced byte-for-byte from the source.
    #[must_use]
    pub fn render(&self) -> String {
        let mut edits: Vec<(Range<usize>, &str)> = Vec::new();
        walk(&self.nodes, &mut |node| match node {
            Node::AtRule(at_rule) => {
                if at_rule.name != at_rule.original_name {
                    edits.push((at_rule.name_span(), at_rule.name.as_str()));
                }
                if at_rule.params != at_rule.original_params {
                    edits.push((at_rule.params_span(), at_rule.params.as_str()));
                }
            }
            Node::Declaration(decl) => {
                if decl.is_modified() {
                    edits.push((decl.value_span(), decl.value.as_str()));
                }
            }
            Node::Rule(_) => {}
        });
        edits.sort_by_key(|(range, _)| range.start);

        let mut output = String::with_capacity(self.source.len());
        let mut cursor = 0;
        for (range, text) in edits {
            output.push_str(&self.source[cursor..range.start]);
            output.push_str(text);
            cursor = range.end;
        }
        output.push_str(&self.source[cursor..]);
        output
    }
}

fn walk<'a, F: FnMut(&'a Node)>(nodes: &'a [Node], f: &mut F) {
    for node in nodes {
        f(node);
        match node {
            Node::AtRule(AtRule {
                nodes: Some(children),
                ..
            })
            | Node::Rule(RuleBlock {
                nodes: children, ..
            }) => walk(children, f),
            _ => {}
        }
    }
}

fn walk_mut<F: FnMut(&mut Node)>(nodes: &mut [Node], f: &mut F) {
    for node in nodes {
        f(node);
        match node {
            Node::AtRule(AtRule {
                nodes: Some(children),
                ..
            })
            | Node::Rule(RuleBlock {
                nodes: children, ..
            }) => walk_mut(children, f),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SHEET: &str = r#"@import "colors";

.button {
  color: $primary;
  @media print {
    margin:   $gap  ;
  }
}
"#;

    #[test]
    fn render_unchanged_is_identity() {
        let sheet = parse(SHEET).expect("parse");
        assert!(!sheet.is_modified());
        assert_eq!(sheet.render(), SHEET);
    }

    #[test]
    fn walks_nested_nodes_in_source_order() {
        let sheet = parse(SHEET).expect("parse");
        let names: Vec<&str> = sheet.at_rules().iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, vec!["import", "media"]);

        let props: Vec<&str> = sheet
            .declarations()
            .iter()
            .map(|d| d.prop.as_str())
            .collect();
        assert_eq!(props, vec!["color", "margin"]);
    }

    #[test]
    fn render_splices_changed_name_and_value() {
        let mut sheet = parse(SHEET).expect("parse");
        sheet.walk_at_rules_mut(|at_rule| {
            if at_rule.name == "import" {
                at_rule.name = "use".to_string();
            }
        });
        sheet.walk_declarations_mut(|decl| {
            if decl.prop == "margin" {
                decl.value = "spacing.$gap".to_string();
            }
        });

        assert!(sheet.is_modified());
        let rendered = sheet.render();
        assert!(rendered.starts_with("@use \"colors\";"));
        assert!(rendered.contains("margin:   spacing.$gap  ;"));
        assert!(rendered.contains("color: $primary;"));
    }

    #[test]
    fn render_keeps_important_flag() {
        let mut sheet = parse("a { color: $primary !important; }").expect("parse");
        sheet.walk_declarations_mut(|decl| decl.value = "colors.$primary".to_string());
        assert_eq!(sheet.render(), "a { color: colors.$primary !important; }");
    }

    #[test]
    fn quoted_params_requires_double_quotes() {
        let sheet = parse("@import \"a/b\";\n@use 'c';\n@import x;").expect("parse");
        let quoted: Vec<Option<&str>> = sheet.at_rules().iter().map(|a| a.quoted_params()).collect();
        assert_eq!(quoted, vec![Some("a/b"), None, None]);
    }
}
