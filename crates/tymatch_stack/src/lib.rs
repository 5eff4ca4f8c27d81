//! Stack safety for recursive walks over type expressions and values.
//!
//! Type expressions and runtime values are trees of arbitrary depth: a
//! `list[list[list[...]]]` annotation or a value nested a hundred thousand
//! levels deep must not overflow the native stack while the comparator,
//! the inference walk, or the annotation parser descends into it.
//!
//! Wrap each recursive step in [`ensure_sufficient_stack`]:
//!
//! ```text
//! fn infer_type(value: &Value) -> TypeExpr {
//!     ensure_sufficient_stack(|| match value {
//!         // ... recurse into members ...
//!     })
//! }
//! ```
//!
//! On wasm targets the call is a plain passthrough.

/// Remaining stack below which a new segment is allocated (100KB).
const RED_ZONE: usize = 100 * 1024;

/// Size of each newly allocated stack segment (1MB).
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}

#[cfg(test)]
mod tests;
