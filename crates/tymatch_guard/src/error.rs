use thiserror::Error;

use tymatch_ir::{ClassName, TypeExpr};
use tymatch_value::Value;

/// A value whose inferred type the declared type does not cover.
///
/// The attribute keeps its previous value.
#[derive(Clone, Debug, PartialEq, Error)]
#[error("cannot assign {value} to `{attribute}`: declared `{declared}`, got `{inferred}`")]
pub struct TypeMismatch {
    pub attribute: String,
    pub declared: TypeExpr,
    pub inferred: TypeExpr,
    pub value: Value,
}

/// A class definition the registry refused.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("class `{0}` is already defined")]
    DuplicateClass(ClassName),

    #[error("class `{class}` extends unknown class `{parent}`")]
    UnknownParent { class: ClassName, parent: ClassName },

    /// The parent is registered, but as a different schema.
    #[error("class `{class}` extends a `{parent}` that is not the registered one")]
    ForeignParent { class: ClassName, parent: ClassName },
}
