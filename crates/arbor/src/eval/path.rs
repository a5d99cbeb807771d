//! Variable lookup

use crate::{Context, EvalConfig, EvalError, MissingVariable};

/// Resolve `name` against `ctx`, applying the missing-variable policy.
///
/// The context is only read. Under [`MissingVariable::Zero`] an unbound
/// name yields `0` without inserting anything; callers that want the zero
/// recorded use [`Context::fill_missing`].
pub fn eval_variable(name: &str, ctx: &Context, cfg: &EvalConfig) -> Result<i32, EvalError> {
    if let Some(value) = ctx.get(name) {
        return Ok(value);
    }

    match cfg.missing_variable {
        MissingVariable::Zero => {
            tracing::debug!(name, "unbound variable read as zero");
            Ok(0)
        }
        MissingVariable::Error => Err(EvalError::MissingVariable {
            name: name.to_string(),
        }),
    }
}
