//! Structural type matching.
//!
//! Two operations over the [`TypeExpr`] algebra:
//!
//! - [`infer_type`] computes the type of a concrete runtime value.
//! - [`is_supertype`] decides whether a declared type accepts an inferred
//!   one.
//!
//! Together they answer "may this value be stored where this type was
//! declared?":
//!
//! ```text
//! let declared = TypeExpr::list(TypeExpr::INT);
//! let value = Value::list(vec![Value::int(1), Value::float(2.0)]);
//! assert!(!is_supertype(&declared, &infer_type(&value)));
//! ```
//!
//! Both are total: they never fail and never panic on a finite input.

mod infer;
mod subtype;

pub use infer::infer_type;
pub use subtype::is_supertype;

pub use tymatch_ir::TypeExpr;
