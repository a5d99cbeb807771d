//! Error types for Arbor evaluation

use thiserror::Error;

/// Errors raised while building or evaluating an expression tree.
///
/// None of these are produced for a well-formed tree evaluated against a
/// complete context under the default [`EvalConfig`](crate::EvalConfig).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    /// A variable was referenced that the context does not bind.
    ///
    /// Only raised under [`MissingVariable::Error`](crate::MissingVariable::Error).
    #[error("missing variable `{name}`")]
    MissingVariable {
        /// Name of the unbound variable
        name: String,
    },

    /// A composite node was built without one of its operands.
    #[error("invalid expression: {reason}")]
    InvalidExpression {
        /// What was wrong with the operands
        reason: String,
    },

    /// Addition left the `i32` range.
    ///
    /// Only raised under [`Overflow::Checked`](crate::Overflow::Checked).
    #[error("integer overflow: {left} + {right}")]
    IntegerOverflow {
        /// Left operand
        left: i32,
        /// Right operand
        right: i32,
    },

    /// The tree is nested deeper than the configured limit.
    #[error("depth limit exceeded: {depth} > {max}")]
    DepthLimitExceeded {
        /// Depth reached
        depth: usize,
        /// Configured maximum
        max: usize,
    },

    /// Evaluation was aborted through the interrupt flag.
    #[error("evaluation interrupted")]
    Interrupted,
}

/// Result type alias for Arbor operations
pub type Result<T> = std::result::Result<T, EvalError>;
