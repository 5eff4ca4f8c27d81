//! Type expressions for runtime structural type matching.
//!
//! A [`TypeExpr`] describes either a declared attribute type (an annotation)
//! or the type inferred from a concrete runtime value. Both sides share one
//! closed algebra:
//!
//! - atomic base types ([`BaseType`]), including user-defined classes
//! - unions over a canonical set of [`Alternatives`]
//! - homogeneous containers (`list[T]`, `set[T]`)
//! - mappings (`dict[K, V]`)
//! - fixed-arity and variadic tuples
//! - the empty-container sentinel produced by inference
//!
//! [`TypeInfo`] classifies a type expression one level deep for the
//! comparator in `tymatch_types`.

mod base;
mod expr;
mod format;
mod inspect;
mod kind;
mod name;

pub use base::BaseType;
pub use expr::{Alternatives, TypeExpr};
pub use inspect::TypeInfo;
pub use kind::ContainerKind;
pub use name::ClassName;
