//! Stack safety for recursion over deep trees.
//!
//! Anything that recurses once per tree level (evaluation, cloning,
//! comparison, formatting) runs its step through
//! [`ensure_sufficient_stack`], which grows the stack on demand instead of
//! overflowing it.

/// Minimum stack space to keep available (100KB red zone).
const RED_ZONE: usize = 100 * 1024;

/// Stack space to allocate when growing (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
