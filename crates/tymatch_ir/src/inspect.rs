//! One-level classification of type expressions.

use smallvec::SmallVec;

use crate::{ContainerKind, TypeExpr};

/// Shape of a type expression, inspected one level deep.
///
/// `arguments` borrow the direct children of the expression and their
/// meaning depends on the shape:
///
/// | shape | arguments |
/// |---|---|
/// | atomic | none |
/// | union | the alternatives |
/// | `list[T]`, `set[T]` | `[T]` |
/// | `dict[K, V]` | `[K, V]` |
/// | fixed tuple | the slots |
/// | variadic tuple | the prefix, then the repeated type last |
/// | empty sentinel | none |
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TypeInfo<'a> {
    pub is_atomic: bool,
    pub container_kind: Option<ContainerKind>,
    pub is_union: bool,
    pub arguments: SmallVec<[&'a TypeExpr; 2]>,
}

impl<'a> TypeInfo<'a> {
    pub fn of(ty: &'a TypeExpr) -> Self {
        let mut info = TypeInfo {
            is_atomic: false,
            container_kind: None,
            is_union: false,
            arguments: SmallVec::new(),
        };

        match ty {
            TypeExpr::Atomic(_) => info.is_atomic = true,
            TypeExpr::Union(alts) => {
                info.is_union = true;
                info.arguments.extend(alts.iter());
            }
            TypeExpr::Sequence(element) => {
                info.container_kind = Some(ContainerKind::Sequence);
                info.arguments.push(element);
            }
            TypeExpr::Set(element) => {
                info.container_kind = Some(ContainerKind::Set);
                info.arguments.push(element);
            }
            TypeExpr::Mapping { key, value } => {
                info.container_kind = Some(ContainerKind::Mapping);
                info.arguments.push(key);
                info.arguments.push(value);
            }
            TypeExpr::FixedTuple(slots) => {
                info.container_kind = Some(ContainerKind::FixedTuple);
                info.arguments.extend(slots.iter());
            }
            TypeExpr::VariadicTuple { prefix, repeated } => {
                info.container_kind = Some(ContainerKind::VariadicTuple);
                info.arguments.extend(prefix.iter());
                info.arguments.push(repeated);
            }
            TypeExpr::Empty(kind) => info.container_kind = Some(*kind),
        }

        info
    }

    /// A container reporting no arguments: the empty sentinel, or a
    /// zero-slot fixed tuple.
    #[inline]
    pub fn is_empty_container(&self) -> bool {
        self.container_kind.is_some() && self.arguments.is_empty()
    }
}
