//! # scss-ns-lint-rules
//!
//! Namespace resolution and built-in lint rules for scss-ns-lint.
//!
//! The [`namespace`] module builds a [`NamespaceIndex`] from the SCSS files
//! under a directory; the [`Formatter`] uses it to spell variable references
//! with their namespace; [`UseVariablePattern`] applies both to linted files.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |------|------|-------------|
//! | NS001 | `use-variable-pattern` | Requires namespaced variables and `@use` instead of `@import` |
//!
//! ## Usage
//!
//! ```ignore
//! use scss_ns_lint_core::Analyzer;
//! use scss_ns_lint_rules::{NamespaceIndex, UseVariablePattern};
//! use std::sync::Arc;
//!
//! let index = Arc::new(NamespaceIndex::build(Path::new(".")));
//! let analyzer = Analyzer::builder()
//!     .root("./styles")
//!     .rule(UseVariablePattern::new(index))
//!     .build()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod formatter;
mod presets;
mod use_variable_pattern;

/// Namespace index construction.
pub mod namespace;

pub use formatter::Formatter;
pub use namespace::{FileScanner, IndexBuilder, NamespaceIndex};
pub use presets::{all_rules, configured_rules};
pub use use_variable_pattern::{
    expected_message, imported_namespaces, IgnoreScope, OptionsError, UseVariablePattern,
};

/// Re-export core types for convenience.
pub use scss_ns_lint_core::{Rule, Severity, Violation};
