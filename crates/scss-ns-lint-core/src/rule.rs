//! Rule trait for defining lint rules.

use crate::context::FileContext;
use crate::stylesheet::Stylesheet;
use crate::types::{Severity, Violation};

/// A per-file lint rule over a parsed stylesheet.
///
/// In report mode (`ctx.fix == false`) a rule must not modify the
/// stylesheet. In fix mode it rewrites the nodes it would have reported and
/// returns violations only for problems it cannot fix.
///
/// # Example
///
/// ```ignore
/// use scss_ns_lint_core::{FileContext, Rule, Stylesheet, Violation};
///
/// pub struct NoCharset;
///
/// impl Rule for NoCharset {
///     fn name(&self) -> &'static str { "no-charset" }
///     fn code(&self) -> &'static str { "NS900" }
///
///     fn check(&self, ctx: &FileContext, sheet: &mut Stylesheet) -> Vec<Violation> {
///         sheet
///             .at_rules()
///             .into_iter()
///             .filter(|a| a.name == "charset")
///             .map(|a| Violation::new(
///                 self.code(),
///                 self.name(),
///                 self.default_severity(),
///                 ctx.location_at(a.span()),
///                 "@charset is not needed",
///             ))
///             .collect()
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "use-variable-pattern").
    fn name(&self) -> &'static str;

    /// Returns the rule code (e.g., "NS001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Returns the default severity for violations from this rule.
    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    /// Checks a single stylesheet.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Context about the file being checked, including fix mode
    /// * `sheet` - The parsed stylesheet; only modified in fix mode
    ///
    /// # Returns
    ///
    /// A vector of violations found in this file.
    fn check(&self, ctx: &FileContext, sheet: &mut Stylesheet) -> Vec<Violation>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
