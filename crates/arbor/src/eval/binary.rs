//! Addition evaluation

use crate::{Context, EvalConfig, EvalError, Expr, Overflow};

use super::Evaluate;

/// Evaluate `left` then `right` one level below `depth` and add them.
pub fn eval_add(
    left: &Expr,
    right: &Expr,
    ctx: &Context,
    cfg: &EvalConfig,
    depth: usize,
) -> Result<i32, EvalError> {
    let left = left.eval(ctx, cfg, depth + 1)?;
    let right = right.eval(ctx, cfg, depth + 1)?;
    add_values(left, right, cfg.overflow)
}

/// Add two already evaluated operands under the given overflow policy.
pub fn add_values(left: i32, right: i32, overflow: Overflow) -> Result<i32, EvalError> {
    match overflow {
        Overflow::Wrapping => Ok(left.wrapping_add(right)),
        Overflow::Checked => left
            .checked_add(right)
            .ok_or(EvalError::IntegerOverflow { left, right }),
    }
}
