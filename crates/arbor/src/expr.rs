//! Expression tree nodes

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;
use std::ops;

use crate::context::Context;
use crate::error::{EvalError, Result};
use crate::stack::ensure_sufficient_stack;

/// A node in an evaluable expression tree.
///
/// Leaves are [`Constant`](Expr::Constant) and [`Variable`](Expr::Variable);
/// [`Add`](Expr::Add) is the only composite and exclusively owns both of its
/// children, so a tree can never share or cycle back to a node. Dropping the
/// root drops the whole tree.
///
/// Dropping, cloning, comparing, hashing and formatting all work on trees
/// far deeper than the thread stack would allow for plain recursion.
///
/// # Example
///
/// ```
/// use arbor::{Context, Expr};
///
/// let ctx = Context::from_iter([("x", 5), ("y", 10)]);
/// let expr = Expr::add(Expr::variable("x"), Expr::constant(2));
///
/// assert_eq!(expr.to_string(), "(x + 2)");
/// assert_eq!(expr.evaluate(&ctx), 7);
/// ```
pub enum Expr {
    /// An integer literal
    Constant(i32),

    /// A name resolved against the context at evaluation time
    Variable(String),

    /// The sum of two owned subtrees
    Add(Box<Expr>, Box<Expr>),
}

impl Expr {
    // ═══════════════════════════════════════════════════════════════════
    // Construction
    // ═══════════════════════════════════════════════════════════════════

    /// Create a constant leaf.
    pub fn constant(value: i32) -> Self {
        Expr::Constant(value)
    }

    /// Create a variable leaf.
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    /// Create an addition node that takes ownership of both operands.
    pub fn add(left: Expr, right: Expr) -> Self {
        Expr::Add(Box::new(left), Box::new(right))
    }

    /// Create an addition node from operands that may be absent.
    ///
    /// # Errors
    ///
    /// `InvalidExpression` if either operand is `None`.
    pub fn try_add_boxed(left: Option<Box<Expr>>, right: Option<Box<Expr>>) -> Result<Self> {
        match (left, right) {
            (Some(left), Some(right)) => Ok(Expr::Add(left, right)),
            (None, None) => Err(invalid("missing left and right operands")),
            (None, Some(_)) => Err(invalid("missing left operand")),
            (Some(_), None) => Err(invalid("missing right operand")),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Evaluation
    // ═══════════════════════════════════════════════════════════════════

    /// Evaluate against `ctx` with the reference semantics.
    ///
    /// Unbound names read as `0` (the context is not modified) and sums
    /// wrap on overflow, so this never fails. Use
    /// [`Evaluator`](crate::Evaluator) to pick stricter policies.
    pub fn evaluate(&self, ctx: &Context) -> i32 {
        crate::eval::eval_reference(self, ctx)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// Check if this node has no children.
    pub fn is_leaf(&self) -> bool {
        !matches!(self, Expr::Add(..))
    }

    /// Get a human-readable name for the node kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Expr::Constant(_) => "constant",
            Expr::Variable(_) => "variable",
            Expr::Add(..) => "addition",
        }
    }

    /// Number of nodes on the longest root-to-leaf path. A leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut max = 0;
        let mut stack = vec![(self, 1)];
        while let Some((node, depth)) = stack.pop() {
            max = max.max(depth);
            if let Expr::Add(left, right) = node {
                stack.push((right, depth + 1));
                stack.push((left, depth + 1));
            }
        }
        max
    }

    /// Total number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        self.preorder().count()
    }

    /// Distinct variable names referenced by the tree, in left-to-right
    /// order of first occurrence.
    pub fn variables(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for node in self.preorder() {
            if let Expr::Variable(name) = node {
                if !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
        }
        names
    }

    /// Iterate over nodes depth-first, parents before children, left
    /// before right.
    pub fn preorder(&self) -> Preorder<'_> {
        Preorder { stack: vec![self] }
    }
}

fn invalid(reason: &str) -> EvalError {
    EvalError::InvalidExpression {
        reason: reason.to_string(),
    }
}

/// Depth-first iterator returned by [`Expr::preorder`].
#[derive(Debug, Clone)]
pub struct Preorder<'a> {
    stack: Vec<&'a Expr>,
}

impl<'a> Iterator for Preorder<'a> {
    type Item = &'a Expr;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        if let Expr::Add(left, right) = node {
            self.stack.push(right);
            self.stack.push(left);
        }
        Some(node)
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Conversions
// ═══════════════════════════════════════════════════════════════════════

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Constant(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::Variable(name.to_string())
    }
}

impl From<String> for Expr {
    fn from(name: String) -> Self {
        Expr::Variable(name)
    }
}

impl ops::Add for Expr {
    type Output = Expr;

    fn add(self, rhs: Expr) -> Expr {
        Expr::add(self, rhs)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => write!(f, "{}", value),
            Expr::Variable(name) => write!(f, "{}", name),
            Expr::Add(left, right) => write!(f, "({} + {})", left, right),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Structural Traits
// ═══════════════════════════════════════════════════════════════════════

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => f.debug_tuple("Constant").field(value).finish(),
            Expr::Variable(name) => f.debug_tuple("Variable").field(name).finish(),
            Expr::Add(left, right) => f.debug_tuple("Add").field(left).field(right).finish(),
        })
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => Expr::Constant(*value),
            Expr::Variable(name) => Expr::Variable(name.clone()),
            Expr::Add(left, right) => Expr::Add(left.clone(), right.clone()),
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expr::Constant(a), Expr::Constant(b)) => a == b,
            (Expr::Variable(a), Expr::Variable(b)) => a == b,
            (Expr::Add(l1, r1), Expr::Add(l2, r2)) => l1 == l2 && r1 == r2,
            _ => false,
        })
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        mem::discriminant(self).hash(state);
        ensure_sufficient_stack(|| match self {
            Expr::Constant(value) => value.hash(state),
            Expr::Variable(name) => name.hash(state),
            Expr::Add(left, right) => {
                left.hash(state);
                right.hash(state);
            }
        })
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        // Detach children onto a work-list so each node is dropped with
        // only leaves beneath it.
        let mut pending = Vec::new();
        if let Expr::Add(left, right) = self {
            if left.is_leaf() && right.is_leaf() {
                return;
            }
            pending.push(detach(left));
            pending.push(detach(right));
        }
        while let Some(mut node) = pending.pop() {
            if let Expr::Add(left, right) = &mut node {
                pending.push(detach(left));
                pending.push(detach(right));
            }
        }
    }
}

fn detach(child: &mut Expr) -> Expr {
    mem::replace(child, Expr::Constant(0))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Expr {
        // ((1 + a) + (b + a))
        Expr::add(
            Expr::add(Expr::constant(1), Expr::variable("a")),
            Expr::add(Expr::variable("b"), Expr::variable("a")),
        )
    }

    #[test]
    fn test_display() {
        assert_eq!(sample().to_string(), "((1 + a) + (b + a))");
        assert_eq!(Expr::constant(-5).to_string(), "-5");
    }

    #[test]
    fn test_depth_and_count() {
        assert_eq!(Expr::constant(1).depth(), 1);
        assert_eq!(sample().depth(), 3);
        assert_eq!(sample().node_count(), 7);
    }

    #[test]
    fn test_variables_first_occurrence_order() {
        assert_eq!(sample().variables(), vec!["a", "b"]);
        assert!(Expr::constant(3).variables().is_empty());
    }

    #[test]
    fn test_preorder() {
        let kinds: Vec<_> = sample().preorder().map(Expr::kind_name).collect();
        assert_eq!(
            kinds,
            vec![
                "addition", "addition", "constant", "variable", "addition", "variable",
                "variable"
            ]
        );
    }

    #[test]
    fn test_operator_and_conversions() {
        let built = Expr::from("x") + Expr::from(2);
        assert_eq!(built, Expr::add(Expr::variable("x"), Expr::constant(2)));
        assert_eq!(Expr::from(String::from("y")), Expr::variable("y"));
    }

    #[test]
    fn test_is_leaf() {
        assert!(Expr::constant(0).is_leaf());
        assert!(Expr::variable("v").is_leaf());
        assert!(!sample().is_leaf());
    }

    fn left_chain(len: usize) -> Expr {
        (0..len).fold(Expr::constant(0), |acc, _| acc + Expr::constant(1))
    }

    #[test]
    fn test_deep_tree_clone_eq_hash_drop() {
        use std::collections::hash_map::DefaultHasher;

        let expr = left_chain(1_000_000);
        let copy = expr.clone();
        assert!(expr == copy);

        let digest = |e: &Expr| {
            let mut hasher = DefaultHasher::new();
            e.hash(&mut hasher);
            hasher.finish()
        };
        assert_eq!(digest(&expr), digest(&copy));

        drop(copy);
        drop(expr);
    }

    #[test]
    fn test_deep_tree_formatting() {
        let expr = left_chain(200_000);
        let rendered = expr.to_string();
        assert!(rendered.starts_with("(((("));
        assert!(rendered.ends_with(" + 1)"));
        assert!(format!("{:?}", expr).starts_with("Add(Add("));
    }

    #[test]
    fn test_equality_distinguishes_kinds() {
        assert_ne!(Expr::constant(0), Expr::variable("0"));
        assert_ne!(sample(), Expr::add(Expr::constant(1), Expr::variable("a")));
        assert_eq!(sample(), sample().clone());
    }

    #[test]
    fn test_try_add_boxed() {
        let ok = Expr::try_add_boxed(
            Some(Box::new(Expr::constant(1))),
            Some(Box::new(Expr::constant(2))),
        );
        assert_eq!(ok, Ok(Expr::add(Expr::constant(1), Expr::constant(2))));

        let err = Expr::try_add_boxed(None, Some(Box::new(Expr::constant(2))));
        assert_eq!(
            err,
            Err(EvalError::InvalidExpression {
                reason: "missing left operand".to_string()
            })
        );

        assert!(Expr::try_add_boxed(Some(Box::new(Expr::constant(1))), None).is_err());
        assert!(Expr::try_add_boxed(None, None).is_err());
    }
}
