//! The structural supertype relation.
//!
//! `is_supertype(annotation, observed)` is evaluated top-down:
//!
//! 1. Structurally identical types always match.
//! 2. An atomic annotation matches nothing else.
//! 3. A union annotation covers an observed union when every observed
//!    alternative is covered by some annotation alternative, and covers any
//!    other observed type when some alternative covers it.
//! 4. `list`/`set` annotations cover the same container kind when the
//!    element types match; an empty observed container always matches.
//! 5. `dict` annotations check key and value independently; an empty
//!    observed dict always matches.
//! 6. Tuples compare slot by slot. A variadic annotation compares its prefix
//!    pairwise and every remaining observed slot against the repeated type;
//!    a prefix slot the observed tuple lacks must cover the repeated type.
//!    A fixed annotation requires equal arity.
//! 7. Every other pairing does not match.
//!
//! The relation is asymmetric: `int | str` covers `int` but
//! `int` does not cover `int | str`.

use tymatch_ir::{ContainerKind, TypeExpr, TypeInfo};
use tymatch_stack::ensure_sufficient_stack;

/// Whether a value of type `observed` may be stored where `annotation` was
/// declared.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(annotation = %annotation, observed = %observed)
)]
pub fn is_supertype(annotation: &TypeExpr, observed: &TypeExpr) -> bool {
    let accepted = covers(annotation, observed);
    tracing::trace!(accepted = accepted, "supertype decided");
    accepted
}

fn covers(annotation: &TypeExpr, observed: &TypeExpr) -> bool {
    ensure_sufficient_stack(|| {
        if annotation == observed {
            return true;
        }

        let anno = TypeInfo::of(annotation);
        if anno.is_atomic {
            return false;
        }

        let value = TypeInfo::of(observed);
        if anno.is_union {
            return if value.is_union {
                value
                    .arguments
                    .iter()
                    .all(|v| anno.arguments.iter().any(|a| covers(a, v)))
            } else {
                anno.arguments.iter().any(|a| covers(a, observed))
            };
        }

        let (Some(anno_kind), Some(value_kind)) = (anno.container_kind, value.container_kind)
        else {
            return false;
        };

        match (anno_kind, value_kind) {
            (ContainerKind::Sequence, ContainerKind::Sequence)
            | (ContainerKind::Set, ContainerKind::Set)
            | (ContainerKind::Mapping, ContainerKind::Mapping) => {
                elements_match(&anno.arguments, &value.arguments)
            }
            (ContainerKind::FixedTuple, ContainerKind::FixedTuple) => {
                slots_match(&anno.arguments, &value.arguments)
            }
            (ContainerKind::VariadicTuple, ContainerKind::FixedTuple) => {
                variadic_covers_slots(&anno.arguments, &value.arguments)
            }
            (ContainerKind::VariadicTuple, ContainerKind::VariadicTuple) => {
                variadic_covers_variadic(&anno.arguments, &value.arguments)
            }
            _ => false,
        }
    })
}

/// Element arguments of `list`, `set` and `dict`.
///
/// An observed container without arguments is the empty sentinel and
/// carries no evidence against any declared element type.
fn elements_match(anno: &[&TypeExpr], value: &[&TypeExpr]) -> bool {
    value.is_empty() || slots_match(anno, value)
}

/// Equal arity, position by position.
fn slots_match(anno: &[&TypeExpr], value: &[&TypeExpr]) -> bool {
    anno.len() == value.len() && anno.iter().zip(value).all(|(a, v)| covers(a, v))
}

/// `tuple[P0, .., Pn, R, ...]` against concrete observed slots.
///
/// The shorter side is padded with the repeated type: each slot past the
/// prefix is checked against it, and each prefix slot the observed tuple
/// does not supply must itself cover it.
fn variadic_covers_slots(anno: &[&TypeExpr], slots: &[&TypeExpr]) -> bool {
    let Some((repeated, prefix)) = anno.split_last() else {
        return false;
    };
    let missing = prefix.get(slots.len()..).unwrap_or_default();
    let extra = slots.get(prefix.len()..).unwrap_or_default();

    prefix.iter().zip(slots).all(|(a, v)| covers(a, v))
        && missing.iter().all(|a| covers(a, repeated))
        && extra.iter().all(|v| covers(repeated, v))
}

/// Variadic against variadic: every concrete tuple the observed side
/// describes must be accepted, so its shortest form must fit and its
/// repeated type must fit the annotation's repeated type.
fn variadic_covers_variadic(anno: &[&TypeExpr], value: &[&TypeExpr]) -> bool {
    let (Some((anno_repeated, _)), Some((value_repeated, value_prefix))) =
        (anno.split_last(), value.split_last())
    else {
        return false;
    };

    variadic_covers_slots(anno, value_prefix) && covers(anno_repeated, value_repeated)
}

#[cfg(test)]
mod tests;
