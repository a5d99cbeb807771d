//! Evaluation configuration

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// What a [`Variable`](crate::Expr::Variable) resolves to when the context
/// has no binding for its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingVariable {
    /// Resolve to `0`. The context is left untouched.
    #[default]
    Zero,

    /// Fail with [`EvalError::MissingVariable`](crate::EvalError::MissingVariable).
    Error,
}

/// How addition behaves when the result leaves the `i32` range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overflow {
    /// Two's complement wraparound.
    #[default]
    Wrapping,

    /// Fail with [`EvalError::IntegerOverflow`](crate::EvalError::IntegerOverflow).
    Checked,
}

/// Configuration and shared state for evaluation.
///
/// Passed by reference through every evaluation step. Cloning shares the
/// interrupt flag, so a clone handed to another thread can abort the run.
#[derive(Debug, Clone)]
pub struct EvalConfig {
    /// Behaviour for unbound variable names
    pub missing_variable: MissingVariable,

    /// Behaviour for out-of-range sums
    pub overflow: Overflow,

    /// Maximum tree depth that will be walked
    pub max_depth: usize,

    /// Interrupt flag - set to true to abort evaluation
    pub interrupt: Arc<AtomicBool>,

    /// Whether to emit a trace event per evaluated node
    pub trace: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self {
            missing_variable: MissingVariable::default(),
            overflow: Overflow::default(),
            max_depth: 10_000,
            interrupt: Arc::new(AtomicBool::new(false)),
            trace: false,
        }
    }
}

impl EvalConfig {
    /// Create a config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a config that never rejects a tree for its depth.
    pub fn unlimited() -> Self {
        Self {
            max_depth: usize::MAX,
            ..Default::default()
        }
    }

    /// Create a config that rejects unbound names and overflowing sums.
    pub fn strict() -> Self {
        Self {
            missing_variable: MissingVariable::Error,
            overflow: Overflow::Checked,
            ..Default::default()
        }
    }

    /// Set the missing-variable policy.
    pub fn with_missing_variable(mut self, policy: MissingVariable) -> Self {
        self.missing_variable = policy;
        self
    }

    /// Set the overflow policy.
    pub fn with_overflow(mut self, policy: Overflow) -> Self {
        self.overflow = policy;
        self
    }

    /// Set the depth limit.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Enable or disable per-node trace events.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Check if evaluation has been interrupted.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Request interruption of evaluation.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Reset the interrupt flag.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}
