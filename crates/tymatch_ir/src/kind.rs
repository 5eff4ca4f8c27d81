//! Container kinds.

use std::fmt;

/// Shape of a parameterized container.
///
/// The empty-container sentinel reports the kind of the container it stands
/// in for, so an inferred `[]` is still a [`ContainerKind::Sequence`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum ContainerKind {
    /// `list[T]`
    Sequence,
    /// `set[T]`
    Set,
    /// `dict[K, V]`
    Mapping,
    /// `tuple[A, B, C]`
    FixedTuple,
    /// `tuple[A, R, ...]`
    VariadicTuple,
}

impl ContainerKind {
    #[inline]
    pub const fn is_tuple(self) -> bool {
        matches!(self, ContainerKind::FixedTuple | ContainerKind::VariadicTuple)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ContainerKind::Sequence => "list",
            ContainerKind::Set => "set",
            ContainerKind::Mapping => "dict",
            ContainerKind::FixedTuple | ContainerKind::VariadicTuple => "tuple",
        }
    }
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
