//! The assignment check.

use tymatch_ir::TypeExpr;
use tymatch_types::{infer_type, is_supertype};
use tymatch_value::Value;

use crate::{SetterSignature, TypeMismatch};

/// Source of declared attribute types for one class.
///
/// Implementations decide how declarations are found, including how
/// inheritance is walked. The guard only consumes the results.
pub trait DeclaredTypeResolver {
    /// The annotated type of `attr`, if the class declares one.
    fn declared_type(&self, attr: &str) -> Option<&TypeExpr>;

    /// The setter of a computed property named `attr`, if any.
    fn property_setter(&self, attr: &str) -> Option<&SetterSignature>;

    /// Type an assignment to `attr` is checked against.
    ///
    /// An annotation wins; otherwise a property setter with exactly one
    /// typed parameter supplies it. `None` means the attribute is untyped.
    fn resolve(&self, attr: &str) -> Option<&TypeExpr> {
        self.declared_type(attr).or_else(|| {
            self.property_setter(attr)
                .and_then(SetterSignature::accepted_type)
        })
    }
}

/// Names starting with `_` are private and never checked.
#[inline]
pub fn is_private(attr: &str) -> bool {
    attr.starts_with('_')
}

/// Decide whether `value` may be assigned to `attr`.
///
/// Private and untyped attributes accept anything. Otherwise the inferred
/// type of `value` must be covered by the resolved declaration.
#[tracing::instrument(level = "debug", skip(resolver, value))]
pub fn check_assignment<R>(resolver: &R, attr: &str, value: &Value) -> Result<(), TypeMismatch>
where
    R: DeclaredTypeResolver + ?Sized,
{
    if is_private(attr) {
        tracing::debug!("private attribute, not checked");
        return Ok(());
    }
    let Some(declared) = resolver.resolve(attr) else {
        tracing::debug!("no declared type, not checked");
        return Ok(());
    };

    let inferred = infer_type(value);
    if is_supertype(declared, &inferred) {
        tracing::debug!(%declared, "assignment accepted");
        return Ok(());
    }

    tracing::debug!(%declared, %inferred, "assignment rejected");
    Err(TypeMismatch {
        attribute: attr.to_owned(),
        declared: declared.clone(),
        inferred,
        value: value.clone(),
    })
}
