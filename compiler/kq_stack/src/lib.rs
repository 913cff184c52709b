//! Stack growth for deep recursion.
//!
//! The parser recurses once per nested block, parenthesis or unary operator,
//! and the evaluator recurses once per nested expression and per user
//! function call. Scripts such as a recursive `func fib(n)` can go deep
//! enough to exhaust a default thread stack, so each recursive entry point
//! goes through [`ensure_sufficient_stack`].
//!
//! On wasm32 the closure is called directly.

/// Grow when less than this much stack remains.
const MIN_REMAINING: usize = 128 * 1024;

/// Size of each new stack segment.
const SEGMENT_SIZE: usize = 2 * 1024 * 1024;

/// Run `f`, first switching to a fresh stack segment if the current one is
/// close to exhaustion.
///
/// ```
/// fn depth(n: u32) -> u32 {
///     kq_stack::ensure_sufficient_stack(|| if n == 0 { 0 } else { 1 + depth(n - 1) })
/// }
/// assert_eq!(depth(1_000), 1_000);
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(MIN_REMAINING, SEGMENT_SIZE, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
