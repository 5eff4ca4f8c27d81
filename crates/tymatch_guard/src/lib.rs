//! Attribute guard.
//!
//! Every assignment to a tracked attribute is checked before it is
//! committed:
//!
//! 1. Names starting with `_` are private and always accepted.
//! 2. The declared type comes from the class annotation, or failing that
//!    from a property setter with exactly one typed parameter. An attribute
//!    with neither is untyped and always accepted.
//! 3. The value's type is inferred and must be covered by the declared type
//!    (`tymatch_types::is_supertype`); otherwise the assignment fails with
//!    [`TypeMismatch`] and nothing is written.
//!
//! [`ClassSchema`] describes what a class declares, [`GuardedObject`] is an
//! instance that enforces it, and [`ClassRegistry`] keeps schemas by name.

mod error;
mod guard;
mod object;
mod registry;
mod schema;

pub use error::{RegistryError, TypeMismatch};
pub use guard::{check_assignment, is_private, DeclaredTypeResolver};
pub use object::GuardedObject;
pub use registry::ClassRegistry;
pub use schema::{
    ClassSchema, ClassSchemaBuilder, FieldDecl, FieldMeta, PropertyDecl, SetterParam,
    SetterSignature,
};
