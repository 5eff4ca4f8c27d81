//! Annotation-syntax rendering of type expressions.
//!
//! Output follows the declaration syntax accepted by `tymatch_parse`, so a
//! declared type prints the way it was written. Empty-container sentinels
//! render with `()` arguments (`list[()]`, `dict[(), ()]`); they have no
//! declaration syntax.

use std::fmt::{self, Write};

use tymatch_stack::ensure_sufficient_stack;

use crate::{ContainerKind, TypeExpr};

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            TypeExpr::Atomic(base) => write!(f, "{base}"),
            TypeExpr::Union(alts) if alts.is_empty() => f.write_str("Never"),
            TypeExpr::Union(alts) => write_separated(f, alts.as_slice(), " | "),
            TypeExpr::Sequence(element) => write!(f, "list[{element}]"),
            TypeExpr::Set(element) => write!(f, "set[{element}]"),
            TypeExpr::Mapping { key, value } => write!(f, "dict[{key}, {value}]"),
            TypeExpr::FixedTuple(slots) if slots.is_empty() => f.write_str("tuple[()]"),
            TypeExpr::FixedTuple(slots) => {
                f.write_str("tuple[")?;
                write_separated(f, slots, ", ")?;
                f.write_char(']')
            }
            TypeExpr::VariadicTuple { prefix, repeated } => {
                f.write_str("tuple[")?;
                for slot in prefix.iter() {
                    write!(f, "{slot}, ")?;
                }
                write!(f, "{repeated}, ...]")
            }
            TypeExpr::Empty(ContainerKind::Mapping) => f.write_str("dict[(), ()]"),
            TypeExpr::Empty(kind) => write!(f, "{kind}[()]"),
        })
    }
}

fn write_separated(f: &mut fmt::Formatter<'_>, items: &[TypeExpr], sep: &str) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(sep)?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests;
