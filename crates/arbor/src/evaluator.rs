//! Policy-aware evaluation entry point

use crate::eval::eval_expr;
use crate::{Context, EvalConfig, Expr, Result};

/// Runs expression trees under a fixed [`EvalConfig`].
///
/// An evaluator only borrows the tree and the context, so one evaluator
/// (or one tree) can be shared across threads that each bring their own
/// context.
///
/// # Example
///
/// ```
/// use arbor::{Context, EvalConfig, EvalError, Evaluator, Expr};
///
/// let evaluator = Evaluator::new(EvalConfig::strict());
/// let expr = Expr::add(Expr::variable("x"), Expr::constant(2));
///
/// let ctx = Context::from_iter([("x", 5)]);
/// assert_eq!(evaluator.evaluate(&expr, &ctx), Ok(7));
///
/// let empty = Context::new();
/// assert_eq!(
///     evaluator.evaluate(&expr, &empty),
///     Err(EvalError::MissingVariable { name: "x".to_string() })
/// );
/// ```
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    config: EvalConfig,
}

impl Evaluator {
    /// Create an evaluator with the given configuration.
    pub fn new(config: EvalConfig) -> Self {
        Self { config }
    }

    /// The configuration this evaluator applies.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Evaluate `expr` against `ctx`.
    pub fn evaluate(&self, expr: &Expr, ctx: &Context) -> Result<i32> {
        let result = eval_expr(expr, ctx, &self.config);
        match &result {
            Ok(value) => tracing::debug!(
                root = expr.kind_name(),
                nodes = expr.node_count(),
                value,
                "evaluated"
            ),
            Err(err) => tracing::debug!(
                root = expr.kind_name(),
                nodes = expr.node_count(),
                %err,
                "evaluation failed"
            ),
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::EvalError;

    #[test]
    fn test_default_evaluator_uses_reference_semantics() {
        let evaluator = Evaluator::default();
        let expr = Expr::add(Expr::variable("nope"), Expr::constant(3));
        assert_eq!(evaluator.evaluate(&expr, &Context::new()), Ok(3));
    }

    #[test]
    fn test_interrupt_through_config_handle() {
        let evaluator = Evaluator::new(EvalConfig::new());
        evaluator.config().interrupt();
        let result = evaluator.evaluate(&Expr::constant(1), &Context::new());
        assert_eq!(result, Err(EvalError::Interrupted));

        evaluator.config().reset_interrupt();
        assert_eq!(evaluator.evaluate(&Expr::constant(1), &Context::new()), Ok(1));
    }
}
