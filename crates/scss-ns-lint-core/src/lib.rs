//! # scss-ns-lint-core
//!
//! Core framework for linting SCSS sources.
//!
//! This crate provides the foundational traits and types for building
//! stylesheet lint rules. It includes:
//!
//! - [`stylesheet`] - a statement-level SCSS reader with lossless rendering
//! - [`Rule`] trait for per-file rules with optional fix mode
//! - [`Analyzer`] for orchestrating lint execution
//! - [`Violation`] for representing lint findings
//!
//! ## Example
//!
//! ```ignore
//! use scss_ns_lint_core::Analyzer;
//!
//! let analyzer = Analyzer::builder()
//!     .root("./styles")
//!     .rule(MyRule::new())
//!     .fix(false)
//!     .build()?;
//!
//! let result = analyzer.analyze()?;
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod analyzer;
mod config;
mod context;
mod rule;
mod types;

/// SCSS statement tree and reader.
pub mod stylesheet;

pub use analyzer::{Analyzer, AnalyzerBuilder, AnalyzerError};
pub use config::{AnalyzerConfig, Config, ConfigError, RuleConfig};
pub use context::FileContext;
pub use rule::{Rule, RuleBox};
pub use stylesheet::{AtRule, Declaration, Node, RuleBlock, Stylesheet};
pub use types::{
    LintResult, Location, Replacement, Severity, Suggestion, Violation, ViolationDiagnostic,
};
