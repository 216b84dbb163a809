//! Stack growth for deep recursion.
//!
//! Parsing and evaluation recurse once per level of expression nesting.
//! Recursive entry points run inside [`ensure_sufficient_stack`], which grows
//! the stack on demand, so deeply nested input is limited by the evaluator's
//! call-depth bound rather than by the host thread's stack size.

/// If less than this much stack remains, a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Runs `f`, first growing the stack if less than the red zone remains.
///
/// ## Example
/// ```
/// use macaque::util::stack::ensure_sufficient_stack;
///
/// fn depth(n: u64) -> u64 {
///     ensure_sufficient_stack(|| if n == 0 { 0 } else { depth(n - 1) + 1 })
/// }
///
/// assert_eq!(depth(50_000), 50_000);
/// ```
#[inline]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}
