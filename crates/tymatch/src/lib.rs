//! Runtime structural type matching.
//!
//! Decide whether a concrete value conforms to a declared type, and guard
//! attribute assignments with that decision:
//!
//! ```text
//! let a = ClassSchema::builder("A")
//!     .field("second", parse_annotation("list[int]")?)
//!     .build();
//! let object = GuardedObject::new(a);
//! object.set("second", Value::list(vec![Value::int(1), Value::int(2)]))?;
//! let err = object.set("second", Value::list(vec![Value::int(1), Value::float(2.0)]));
//! // declared `list[int]`, got `list[int | float]`
//! ```
//!
//! Set `TYMATCH_LOG` (an `EnvFilter` directive such as `tymatch_guard=debug`)
//! and call [`init_tracing`] to see accept and reject decisions.

mod logging;

pub use logging::init_tracing;

pub use tymatch_guard::{
    check_assignment, is_private, ClassRegistry, ClassSchema, ClassSchemaBuilder,
    DeclaredTypeResolver, FieldDecl, FieldMeta, GuardedObject, PropertyDecl, RegistryError,
    SetterParam, SetterSignature, TypeMismatch,
};
pub use tymatch_ir::{Alternatives, BaseType, ClassName, ContainerKind, TypeExpr, TypeInfo};
pub use tymatch_parse::{parse_annotation, ParseError, Span};
pub use tymatch_types::{infer_type, is_supertype};
pub use tymatch_value::{Heap, Instance, Value};
