//! Stack growth for recursive descent.
//!
//! The parser recurses once per nested expression and statement, so a
//! pathological input (`((((...))))`, ten thousand nested blocks) would
//! otherwise overflow the native stack. Wrap each recursive entry point in
//! [`ensure_sufficient_stack`].
//!
//! On wasm targets this is a passthrough.

/// Grow when less than this much stack remains.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new stack segment.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first growing the stack if the remaining space is below the
/// red zone.
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
