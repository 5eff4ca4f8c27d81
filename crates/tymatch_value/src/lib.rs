//! Runtime values for structural type matching.
//!
//! [`Value`] models the dynamically typed data an attribute can be assigned:
//! scalars, text and bytes, the four builtin container shapes, and
//! instances of user-defined classes. Inference in `tymatch_types` turns a
//! `Value` into a `TypeExpr`.

mod instance;
mod value;

pub use instance::Instance;
pub use value::{Heap, Value};
