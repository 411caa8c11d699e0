//! Namespaced spelling of variable references.

use crate::namespace::NamespaceIndex;
use std::borrow::Cow;

/// Rewrites variable tokens to their namespaced form.
#[derive(Debug, Clone, Copy)]
pub struct Formatter<'a> {
    index: &'a NamespaceIndex,
}

impl<'a> Formatter<'a> {
    /// Creates a formatter over an index.
    #[must_use]
    pub fn new(index: &'a NamespaceIndex) -> Self {
        Self { index }
    }

    /// Returns `<namespace>.<token>` for indexed tokens, `token` otherwise.
    #[must_use]
    pub fn format<'t>(&self, token: &'t str) -> Cow<'t, str> {
        match self.index.namespace_of(token) {
            Some(namespace) if !namespace.is_empty() => Cow::Owned(format!("{namespace}.{token}")),
            _ => Cow::Borrowed(token),
        }
    }

    /// Formats each single-space-separated piece of `value`.
    ///
    /// Only whole pieces are matched: `$a,` or `calc($a` stay as they are.
    #[must_use]
    pub fn format_value(&self, value: &str) -> String {
        value
            .split(' ')
            .map(|piece| self.format(piece))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
