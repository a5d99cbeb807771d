//! Variable bindings supplied by the caller at evaluation time

use std::fmt;

use indexmap::IndexMap;

use crate::expr::Expr;

/// A mapping from variable name to integer value.
///
/// The context is owned by the caller and only borrowed by evaluation, so
/// evaluating never changes it. Names are unique; re-defining a name
/// replaces its value in place.
///
/// # Example
///
/// ```
/// use arbor::Context;
///
/// let mut ctx = Context::from_iter([("x", 5), ("y", 10)]);
/// assert_eq!(ctx.get("x"), Some(5));
///
/// ctx.define("x", 7);
/// assert_eq!(ctx.get("x"), Some(7));
/// assert_eq!(ctx.get("z"), None);
/// assert_eq!(ctx.to_string(), "{x: 7, y: 10}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Context {
    bindings: IndexMap<String, i32>,
}

impl Context {
    /// Create an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Definition
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` to `value`, returning the previous value if any.
    pub fn define(&mut self, name: impl Into<String>, value: i32) -> Option<i32> {
        self.bindings.insert(name.into(), value)
    }

    /// Remove the binding for `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<i32> {
        self.bindings.shift_remove(name)
    }

    /// Bind every name `expr` references but this context lacks to `0`.
    ///
    /// This is the explicit form of default-on-lookup map access: the
    /// context ends up holding a zero for each name a zero-default
    /// evaluation would have invented. Returns how many bindings were added.
    pub fn fill_missing(&mut self, expr: &Expr) -> usize {
        let mut added = 0;
        for name in expr.variables() {
            if !self.bindings.contains_key(name) {
                self.bindings.insert(name.to_string(), 0);
                added += 1;
            }
        }
        if added > 0 {
            tracing::debug!(added, "filled missing variables with zero");
        }
        added
    }

    /// Remove all bindings.
    pub fn clear(&mut self) {
        self.bindings.clear();
    }

    // ═══════════════════════════════════════════════════════════════════
    // Binding Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up the value bound to `name`.
    pub fn get(&self, name: &str) -> Option<i32> {
        self.bindings.get(name).copied()
    }

    /// Check if a binding exists.
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Iteration and Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Iterate over bindings in definition order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), *v))
    }

    /// Get all bound names in definition order.
    pub fn names(&self) -> Vec<&str> {
        self.bindings.keys().map(String::as_str).collect()
    }

    /// Get the number of bindings.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Check if the context is empty.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, i32)> for Context {
    fn from_iter<I: IntoIterator<Item = (K, i32)>>(iter: I) -> Self {
        Self {
            bindings: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl<K: Into<String>> Extend<(K, i32)> for Context {
    fn extend<I: IntoIterator<Item = (K, i32)>>(&mut self, iter: I) {
        self.bindings
            .extend(iter.into_iter().map(|(k, v)| (k.into(), v)));
    }
}

impl fmt::Display for Context {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (name, value)) in self.bindings.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        write!(f, "}}")
    }
}
