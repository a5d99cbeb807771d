//! # Arbor
//!
//! A tree-walking evaluator for integer expression trees.
//!
//! Trees are built in code from three node kinds (constant, variable and
//! addition) and evaluated against a caller-owned [`Context`] that binds
//! variable names to integers. There is no parser: the tree *is* the
//! program.
//!
//! ## Architecture
//!
//! - **Expr**: closed set of node kinds; additions own their children
//! - **Context**: name to `i32` bindings, borrowed for each evaluation
//! - **EvalConfig**: policies for unbound names and overflow, plus depth
//!   and interrupt guards
//! - **Evaluator**: applies a config to any tree and context
//!
//! ## Example
//!
//! ```
//! use arbor::{Context, Expr};
//!
//! let ctx = Context::from_iter([("x", 5), ("y", 10)]);
//! let expr = Expr::variable("x") + Expr::constant(2);
//! assert_eq!(expr.evaluate(&ctx), 7);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod config;
pub mod context;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod expr;
mod stack;

// Re-export main types
pub use config::{EvalConfig, MissingVariable, Overflow};
pub use context::Context;
pub use error::{EvalError, Result};
pub use eval::{eval_expr, Evaluate};
pub use evaluator::Evaluator;
pub use expr::{Expr, Preorder};

/// Arbor version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
