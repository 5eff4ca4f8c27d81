//! The type expression algebra.
//!
//! # Canonical unions
//!
//! [`TypeExpr::union`] is the only way to build a union. It flattens nested
//! unions, drops duplicate alternatives and sorts what remains, so two
//! unions with the same alternatives are equal regardless of the order they
//! were written in. A union of one alternative collapses to that
//! alternative; a union of none is the bottom type [`TypeExpr::never`].

use std::slice;

use crate::{BaseType, ClassName, ContainerKind};

/// A declared or inferred type.
///
/// Each variant owns its children, so a `TypeExpr` is always a finite tree.
/// Type expressions are immutable once built.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum TypeExpr {
    /// An opaque base type, compared by identity.
    Atomic(BaseType),
    /// Any of a canonical set of alternatives.
    Union(Alternatives),
    /// Ordered homogeneous collection: `list[T]`.
    Sequence(Box<TypeExpr>),
    /// Unordered homogeneous collection: `set[T]`.
    Set(Box<TypeExpr>),
    /// Key/value mapping: `dict[K, V]`.
    Mapping {
        key: Box<TypeExpr>,
        value: Box<TypeExpr>,
    },
    /// Arity-exact, position-significant tuple.
    FixedTuple(Box<[TypeExpr]>),
    /// A fixed prefix followed by zero or more `repeated` slots.
    VariadicTuple {
        prefix: Box<[TypeExpr]>,
        repeated: Box<TypeExpr>,
    },
    /// Inferred type of a zero-length container.
    ///
    /// Carries no element information. Never produced by a declaration.
    Empty(ContainerKind),
}

/// Canonical alternatives of a union.
///
/// Invariant: sorted, free of duplicates, free of nested unions, and never
/// exactly one element long.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct Alternatives(Box<[TypeExpr]>);

impl Alternatives {
    #[inline]
    pub fn as_slice(&self) -> &[TypeExpr] {
        &self.0
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<'_, TypeExpr> {
        self.0.iter()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, ty: &TypeExpr) -> bool {
        self.0.binary_search(ty).is_ok()
    }
}

impl<'a> IntoIterator for &'a Alternatives {
    type Item = &'a TypeExpr;
    type IntoIter = slice::Iter<'a, TypeExpr>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl TypeExpr {
    pub const INT: TypeExpr = TypeExpr::Atomic(BaseType::Int);
    pub const FLOAT: TypeExpr = TypeExpr::Atomic(BaseType::Float);
    pub const BOOL: TypeExpr = TypeExpr::Atomic(BaseType::Bool);
    pub const STR: TypeExpr = TypeExpr::Atomic(BaseType::Str);
    pub const BYTES: TypeExpr = TypeExpr::Atomic(BaseType::Bytes);
    pub const COMPLEX: TypeExpr = TypeExpr::Atomic(BaseType::Complex);
    pub const NONE: TypeExpr = TypeExpr::Atomic(BaseType::NoneType);

    /// Nominal type of a user-defined class.
    pub fn class(name: impl Into<ClassName>) -> Self {
        TypeExpr::Atomic(BaseType::Class(name.into()))
    }

    /// Build a canonical union from any number of members.
    ///
    /// Members that are themselves unions contribute their alternatives.
    pub fn union<I>(members: I) -> Self
    where
        I: IntoIterator<Item = TypeExpr>,
    {
        let mut flat = Vec::new();
        for member in members {
            match member {
                TypeExpr::Union(alts) => flat.extend(alts.0.into_vec()),
                other => flat.push(other),
            }
        }
        flat.sort();
        flat.dedup();

        if flat.len() == 1 {
            if let Some(only) = flat.pop() {
                return only;
            }
        }
        TypeExpr::Union(Alternatives(flat.into_boxed_slice()))
    }

    /// The empty union. Matches no value; as an observed type it is covered
    /// by every union annotation.
    pub fn never() -> Self {
        TypeExpr::Union(Alternatives(Box::default()))
    }

    /// `T | None`
    pub fn optional(inner: TypeExpr) -> Self {
        TypeExpr::union([inner, TypeExpr::NONE])
    }

    pub fn list(element: TypeExpr) -> Self {
        TypeExpr::Sequence(Box::new(element))
    }

    pub fn set(element: TypeExpr) -> Self {
        TypeExpr::Set(Box::new(element))
    }

    pub fn dict(key: TypeExpr, value: TypeExpr) -> Self {
        TypeExpr::Mapping {
            key: Box::new(key),
            value: Box::new(value),
        }
    }

    pub fn tuple(slots: impl IntoIterator<Item = TypeExpr>) -> Self {
        TypeExpr::FixedTuple(slots.into_iter().collect())
    }

    /// `tuple[prefix..., repeated, ...]`
    pub fn variadic_tuple(prefix: impl IntoIterator<Item = TypeExpr>, repeated: TypeExpr) -> Self {
        TypeExpr::VariadicTuple {
            prefix: prefix.into_iter().collect(),
            repeated: Box::new(repeated),
        }
    }

    /// Empty-container sentinel for `kind`.
    ///
    /// An empty tuple value carries no repeat marker, so the variadic kind
    /// is recorded as a fixed tuple.
    pub fn empty(kind: ContainerKind) -> Self {
        match kind {
            ContainerKind::VariadicTuple => TypeExpr::Empty(ContainerKind::FixedTuple),
            kind => TypeExpr::Empty(kind),
        }
    }

    #[inline]
    pub fn is_atomic(&self) -> bool {
        matches!(self, TypeExpr::Atomic(_))
    }

    #[inline]
    pub fn is_union(&self) -> bool {
        matches!(self, TypeExpr::Union(_))
    }

    /// Alternatives of a union, or `None` for any other shape.
    pub fn alternatives(&self) -> Option<&Alternatives> {
        match self {
            TypeExpr::Union(alts) => Some(alts),
            _ => None,
        }
    }
}

impl From<BaseType> for TypeExpr {
    fn from(base: BaseType) -> Self {
        TypeExpr::Atomic(base)
    }
}
