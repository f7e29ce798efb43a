//! Stack growth guard for deeply nested source and deep recursion.
//!
//! The parser recurses once per nesting level and the evaluator once per
//! nested expression and user-function call. Both wrap their recursive entry
//! points in [`ensure_sufficient_stack`] so that a program hitting the
//! interpreter's call-depth limit reports an error instead of exhausting the
//! host thread's stack first.
//!
//! On native targets the stack is grown on demand with `stacker`; on WASM
//! the closure is called directly.

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
