//! Type inference over runtime values.
//!
//! The inferred type is the most precise type expression the algebra can
//! state for a value:
//!
//! | value | inferred |
//! |---|---|
//! | scalar, string, bytes, object | its base type |
//! | `[]`, `set()`, `{}`, `()` | the empty sentinel of that kind |
//! | list / set | `list[U]` / `set[U]`, `U` the union of member types |
//! | dict | `dict[K, V]`, unions of key and of value types |
//! | tuple | `tuple[T0, .., Tn]`, one slot per position |
//!
//! Inferred types never contain a variadic tuple.

use tymatch_ir::{ContainerKind, TypeExpr};
use tymatch_stack::ensure_sufficient_stack;
use tymatch_value::Value;

/// Compute the structural type of a value.
#[tracing::instrument(level = "trace", skip_all, fields(value_type = value.type_name()))]
pub fn infer_type(value: &Value) -> TypeExpr {
    let ty = infer(value);
    tracing::trace!(inferred = %ty, "type inferred");
    ty
}

fn infer(value: &Value) -> TypeExpr {
    ensure_sufficient_stack(|| match value {
        Value::List(items) => homogeneous(items, ContainerKind::Sequence, TypeExpr::list),
        Value::Set(items) => homogeneous(items, ContainerKind::Set, TypeExpr::set),
        Value::Dict(entries) if entries.is_empty() => TypeExpr::empty(ContainerKind::Mapping),
        Value::Dict(entries) => TypeExpr::dict(
            TypeExpr::union(entries.iter().map(|(k, _)| infer(k))),
            TypeExpr::union(entries.iter().map(|(_, v)| infer(v))),
        ),
        Value::Tuple(items) if items.is_empty() => TypeExpr::empty(ContainerKind::FixedTuple),
        Value::Tuple(items) => TypeExpr::tuple(items.iter().map(infer)),
        scalar => scalar
            .base_type()
            .map_or_else(TypeExpr::never, TypeExpr::Atomic),
    })
}

/// `list` and `set`: the union of every member type.
fn homogeneous(
    items: &[Value],
    kind: ContainerKind,
    wrap: fn(TypeExpr) -> TypeExpr,
) -> TypeExpr {
    if items.is_empty() {
        TypeExpr::empty(kind)
    } else {
        wrap(TypeExpr::union(items.iter().map(infer)))
    }
}
