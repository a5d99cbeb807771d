//! Expression evaluation

pub mod binary;
pub mod path;

use crate::stack::ensure_sufficient_stack;
use crate::{Context, EvalConfig, EvalError, Expr};

/// Trait for evaluating tree nodes to integers.
///
/// `depth` is the depth of `self` in the tree being walked; the root is at
/// depth 1.
pub trait Evaluate {
    /// Evaluate this node against `ctx` under `cfg`.
    fn eval(&self, ctx: &Context, cfg: &EvalConfig, depth: usize) -> Result<i32, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn eval(&self, ctx: &Context, cfg: &EvalConfig, depth: usize) -> Result<i32, EvalError> {
        if cfg.is_interrupted() {
            return Err(EvalError::Interrupted);
        }
        if depth > cfg.max_depth {
            return Err(EvalError::DepthLimitExceeded {
                depth,
                max: cfg.max_depth,
            });
        }
        if cfg.trace {
            tracing::trace!(kind = self.kind_name(), depth, "eval");
        }

        match self {
            Expr::Constant(value) => Ok(*value),
            Expr::Variable(name) => path::eval_variable(name, ctx, cfg),
            Expr::Add(left, right) => {
                ensure_sufficient_stack(|| binary::eval_add(left, right, ctx, cfg, depth))
            }
        }
    }
}

/// Evaluate with zero-default lookup and wrapping addition.
///
/// This path has no failure modes, so it skips the policy, depth and
/// interrupt checks of [`Evaluate::eval`].
pub(crate) fn eval_reference(expr: &Expr, ctx: &Context) -> i32 {
    match expr {
        Expr::Constant(value) => *value,
        Expr::Variable(name) => ctx.get(name).unwrap_or(0),
        Expr::Add(left, right) => ensure_sufficient_stack(|| {
            eval_reference(left, ctx).wrapping_add(eval_reference(right, ctx))
        }),
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Convenience Functions
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a whole tree (convenience wrapper).
pub fn eval_expr(expr: &Expr, ctx: &Context, cfg: &EvalConfig) -> Result<i32, EvalError> {
    expr.eval(ctx, cfg, 1)
}
