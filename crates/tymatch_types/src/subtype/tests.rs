use tymatch_ir::{ContainerKind, TypeExpr};

use super::is_supertype;

fn int_or_float() -> TypeExpr {
    TypeExpr::union([TypeExpr::INT, TypeExpr::FLOAT])
}

fn str_or_bytes() -> TypeExpr {
    TypeExpr::union([TypeExpr::STR, TypeExpr::BYTES])
}

// Atomic annotations

#[test]
fn identical_atoms_match() {
    assert!(is_supertype(&TypeExpr::INT, &TypeExpr::INT));
    assert!(is_supertype(&TypeExpr::class("B"), &TypeExpr::class("B")));
}

#[test]
fn different_atoms_never_match() {
    assert!(!is_supertype(&TypeExpr::INT, &TypeExpr::FLOAT));
    assert!(!is_supertype(&TypeExpr::FLOAT, &TypeExpr::INT));
    assert!(!is_supertype(&TypeExpr::INT, &TypeExpr::BOOL));
    assert!(!is_supertype(&TypeExpr::class("A"), &TypeExpr::class("B")));
}

#[test]
fn atomic_annotation_rejects_containers_and_unions() {
    assert!(!is_supertype(&TypeExpr::INT, &TypeExpr::list(TypeExpr::INT)));
    assert!(!is_supertype(&TypeExpr::INT, &int_or_float()));
    assert!(!is_supertype(
        &TypeExpr::INT,
        &TypeExpr::empty(ContainerKind::Sequence)
    ));
}

// Unions

#[test]
fn union_accepts_each_alternative() {
    assert!(is_supertype(&int_or_float(), &TypeExpr::INT));
    assert!(is_supertype(&int_or_float(), &TypeExpr::FLOAT));
    assert!(!is_supertype(&int_or_float(), &TypeExpr::STR));
}

#[test]
fn union_coverage_is_asymmetric() {
    let int_or_str = TypeExpr::union([TypeExpr::INT, TypeExpr::STR]);
    assert!(is_supertype(&int_or_str, &TypeExpr::union([TypeExpr::INT])));
    assert!(!is_supertype(&TypeExpr::union([TypeExpr::INT]), &int_or_str));
}

#[test]
fn broader_union_covers_narrower_union() {
    let wide = TypeExpr::union([TypeExpr::INT, TypeExpr::FLOAT, TypeExpr::STR]);
    assert!(is_supertype(&wide, &int_or_float()));
    assert!(!is_supertype(&int_or_float(), &wide));
}

#[test]
fn union_alternatives_may_cover_through_containers() {
    let declared = TypeExpr::union([
        TypeExpr::list(TypeExpr::union([TypeExpr::INT, TypeExpr::FLOAT, TypeExpr::STR])),
        TypeExpr::dict(int_or_float(), str_or_bytes()),
    ]);
    assert!(is_supertype(&declared, &TypeExpr::list(TypeExpr::INT)));
    assert!(is_supertype(&declared, &TypeExpr::list(TypeExpr::STR)));
    assert!(is_supertype(
        &declared,
        &TypeExpr::dict(TypeExpr::FLOAT, TypeExpr::BYTES)
    ));
    assert!(!is_supertype(&declared, &TypeExpr::list(TypeExpr::BYTES)));
    assert!(!is_supertype(
        &declared,
        &TypeExpr::list(TypeExpr::class("B"))
    ));
}

#[test]
fn observed_union_needs_every_alternative_covered() {
    let declared = TypeExpr::union([
        TypeExpr::list(TypeExpr::INT),
        TypeExpr::list(TypeExpr::STR),
    ]);
    let observed = TypeExpr::union([TypeExpr::list(TypeExpr::INT), TypeExpr::list(TypeExpr::STR)]);
    assert!(is_supertype(&declared, &observed));

    let mixed = TypeExpr::union([TypeExpr::list(TypeExpr::INT), TypeExpr::FLOAT]);
    assert!(!is_supertype(&declared, &mixed));
}

#[test]
fn non_union_annotation_rejects_observed_union() {
    let declared = TypeExpr::list(int_or_float());
    assert!(!is_supertype(&declared, &int_or_float()));
}

#[test]
fn never_is_covered_by_unions_only() {
    assert!(is_supertype(&int_or_float(), &TypeExpr::never()));
    assert!(!is_supertype(&TypeExpr::never(), &TypeExpr::INT));
    assert!(!is_supertype(&TypeExpr::INT, &TypeExpr::never()));
}

// Homogeneous containers

#[test]
fn list_elements_compare_recursively() {
    let declared = TypeExpr::list(int_or_float());
    assert!(is_supertype(&declared, &TypeExpr::list(TypeExpr::INT)));
    assert!(is_supertype(&declared, &TypeExpr::list(int_or_float())));
    assert!(!is_supertype(
        &TypeExpr::list(TypeExpr::INT),
        &TypeExpr::list(int_or_float())
    ));
}

#[test]
fn nested_lists() {
    let declared = TypeExpr::list(TypeExpr::list(TypeExpr::INT));
    assert!(is_supertype(
        &declared,
        &TypeExpr::list(TypeExpr::list(TypeExpr::INT))
    ));
    assert!(is_supertype(
        &declared,
        &TypeExpr::list(TypeExpr::empty(ContainerKind::Sequence))
    ));
    assert!(!is_supertype(
        &declared,
        &TypeExpr::list(TypeExpr::list(TypeExpr::STR))
    ));
}

#[test]
fn sets_match_sets_only() {
    let declared = TypeExpr::set(TypeExpr::INT);
    assert!(is_supertype(&declared, &TypeExpr::set(TypeExpr::INT)));
    assert!(!is_supertype(&declared, &TypeExpr::list(TypeExpr::INT)));
    assert!(!is_supertype(
        &TypeExpr::list(TypeExpr::INT),
        &TypeExpr::set(TypeExpr::INT)
    ));
}

#[test]
fn empty_containers_match_any_element_type() {
    for element in [TypeExpr::INT, int_or_float(), TypeExpr::list(TypeExpr::STR)] {
        assert!(is_supertype(
            &TypeExpr::list(element.clone()),
            &TypeExpr::empty(ContainerKind::Sequence)
        ));
        assert!(is_supertype(
            &TypeExpr::set(element.clone()),
            &TypeExpr::empty(ContainerKind::Set)
        ));
        assert!(is_supertype(
            &TypeExpr::dict(TypeExpr::STR, element),
            &TypeExpr::empty(ContainerKind::Mapping)
        ));
    }
}

#[test]
fn empty_container_of_the_wrong_kind_does_not_match() {
    assert!(!is_supertype(
        &TypeExpr::list(TypeExpr::INT),
        &TypeExpr::empty(ContainerKind::Set)
    ));
    assert!(!is_supertype(
        &TypeExpr::dict(TypeExpr::INT, TypeExpr::INT),
        &TypeExpr::empty(ContainerKind::Sequence)
    ));
}

#[test]
fn empty_sentinel_as_annotation_only_matches_itself() {
    let empty = TypeExpr::empty(ContainerKind::Sequence);
    assert!(is_supertype(&empty, &empty));
    assert!(!is_supertype(&empty, &TypeExpr::list(TypeExpr::INT)));
}

// Mappings

#[test]
fn mapping_slots_are_independent() {
    let declared = TypeExpr::dict(int_or_float(), str_or_bytes());
    assert!(is_supertype(
        &declared,
        &TypeExpr::dict(TypeExpr::INT, TypeExpr::STR)
    ));
    assert!(is_supertype(
        &declared,
        &TypeExpr::dict(int_or_float(), TypeExpr::BYTES)
    ));
    assert!(!is_supertype(
        &TypeExpr::dict(TypeExpr::INT, TypeExpr::STR),
        &TypeExpr::dict(TypeExpr::FLOAT, TypeExpr::STR)
    ));
    assert!(!is_supertype(
        &TypeExpr::dict(TypeExpr::INT, TypeExpr::STR),
        &TypeExpr::dict(TypeExpr::INT, TypeExpr::BYTES)
    ));
}

// Tuples

#[test]
fn variadic_tuple_repeats_its_type() {
    let declared = TypeExpr::variadic_tuple(Vec::<TypeExpr>::new(), TypeExpr::INT);
    assert!(is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::INT, TypeExpr::INT, TypeExpr::INT])
    ));
    assert!(is_supertype(&declared, &TypeExpr::tuple([TypeExpr::INT])));
    assert!(!is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::INT, TypeExpr::STR])
    ));
}

#[test]
fn variadic_tuple_accepts_empty_tuple() {
    let declared = TypeExpr::variadic_tuple(Vec::<TypeExpr>::new(), TypeExpr::STR);
    assert!(is_supertype(
        &declared,
        &TypeExpr::empty(ContainerKind::FixedTuple)
    ));
}

#[test]
fn variadic_tuple_prefix_is_positional() {
    let declared = TypeExpr::variadic_tuple([TypeExpr::STR], TypeExpr::INT);
    assert!(is_supertype(&declared, &TypeExpr::tuple([TypeExpr::STR])));
    assert!(is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::STR, TypeExpr::INT, TypeExpr::INT])
    ));
    assert!(!is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::INT, TypeExpr::INT])
    ));
    // A missing `str` slot is padded with `int`, which `str` does not cover
    assert!(!is_supertype(
        &declared,
        &TypeExpr::empty(ContainerKind::FixedTuple)
    ));
}

#[test]
fn short_tuple_pads_prefix_with_repeated_type() {
    // tuple[int, int, ...]
    let declared = TypeExpr::variadic_tuple([TypeExpr::INT], TypeExpr::INT);
    assert!(is_supertype(
        &declared,
        &TypeExpr::empty(ContainerKind::FixedTuple)
    ));

    // tuple[int | str, int, ...]
    let declared = TypeExpr::variadic_tuple(
        [TypeExpr::union([TypeExpr::INT, TypeExpr::STR])],
        TypeExpr::INT,
    );
    assert!(is_supertype(
        &declared,
        &TypeExpr::empty(ContainerKind::FixedTuple)
    ));

    // tuple[int, int, int, ...]
    let declared = TypeExpr::variadic_tuple([TypeExpr::INT, TypeExpr::INT], TypeExpr::INT);
    assert!(is_supertype(&declared, &TypeExpr::tuple([TypeExpr::INT])));
    assert!(!is_supertype(&declared, &TypeExpr::tuple([TypeExpr::STR])));
}

#[test]
fn short_tuple_rejected_when_prefix_does_not_cover_repeated_type() {
    // tuple[int, float, ...]
    let declared = TypeExpr::variadic_tuple([TypeExpr::INT], TypeExpr::FLOAT);
    assert!(!is_supertype(
        &declared,
        &TypeExpr::empty(ContainerKind::FixedTuple)
    ));

    // tuple[str, int, float, ...] against (str,): the `int` slot is padded with `float`
    let declared = TypeExpr::variadic_tuple([TypeExpr::STR, TypeExpr::INT], TypeExpr::FLOAT);
    assert!(!is_supertype(&declared, &TypeExpr::tuple([TypeExpr::STR])));

    // tuple[str, int | float, float, ...] against (str,)
    let declared = TypeExpr::variadic_tuple([TypeExpr::STR, int_or_float()], TypeExpr::FLOAT);
    assert!(is_supertype(&declared, &TypeExpr::tuple([TypeExpr::STR])));
}

#[test]
fn variadic_repeated_union() {
    let declared = TypeExpr::variadic_tuple(Vec::<TypeExpr>::new(), int_or_float());
    assert!(is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::FLOAT, TypeExpr::INT, TypeExpr::FLOAT])
    ));
    assert!(!is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::FLOAT, TypeExpr::NONE])
    ));
}

#[test]
fn variadic_covers_narrower_variadic() {
    let declared = TypeExpr::variadic_tuple(Vec::<TypeExpr>::new(), int_or_float());
    assert!(is_supertype(
        &declared,
        &TypeExpr::variadic_tuple(Vec::<TypeExpr>::new(), TypeExpr::INT)
    ));
    assert!(is_supertype(
        &declared,
        &TypeExpr::variadic_tuple([TypeExpr::FLOAT], TypeExpr::INT)
    ));
    assert!(!is_supertype(
        &TypeExpr::variadic_tuple(Vec::<TypeExpr>::new(), TypeExpr::INT),
        &TypeExpr::variadic_tuple(Vec::<TypeExpr>::new(), int_or_float())
    ));
    // Unbounded arity never fits a fixed tuple
    assert!(!is_supertype(
        &TypeExpr::tuple([TypeExpr::INT]),
        &TypeExpr::variadic_tuple(Vec::<TypeExpr>::new(), TypeExpr::INT)
    ));
}

#[test]
fn fixed_tuple_requires_exact_arity() {
    let declared = TypeExpr::tuple([TypeExpr::INT, TypeExpr::STR]);
    assert!(is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::INT, TypeExpr::STR])
    ));
    assert!(!is_supertype(&declared, &TypeExpr::tuple([TypeExpr::INT])));
    assert!(!is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::INT, TypeExpr::STR, TypeExpr::STR])
    ));
    assert!(!is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::STR, TypeExpr::INT])
    ));
}

#[test]
fn fixed_tuple_slots_compare_recursively() {
    let declared = TypeExpr::tuple([int_or_float(), TypeExpr::list(TypeExpr::STR)]);
    assert!(is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::FLOAT, TypeExpr::list(TypeExpr::STR)])
    ));
    assert!(is_supertype(
        &declared,
        &TypeExpr::tuple([TypeExpr::INT, TypeExpr::empty(ContainerKind::Sequence)])
    ));
}

#[test]
fn empty_tuple_matches_zero_arity_only() {
    let empty = TypeExpr::empty(ContainerKind::FixedTuple);
    assert!(is_supertype(&TypeExpr::tuple(Vec::<TypeExpr>::new()), &empty));
    assert!(!is_supertype(&TypeExpr::tuple([TypeExpr::INT]), &empty));
}

// Kind mismatches

#[test]
fn unrelated_container_kinds_do_not_match() {
    assert!(!is_supertype(
        &TypeExpr::list(TypeExpr::INT),
        &TypeExpr::dict(TypeExpr::INT, TypeExpr::INT)
    ));
    assert!(!is_supertype(
        &TypeExpr::dict(TypeExpr::INT, TypeExpr::INT),
        &TypeExpr::tuple([TypeExpr::INT, TypeExpr::INT])
    ));
    assert!(!is_supertype(
        &TypeExpr::tuple([TypeExpr::INT]),
        &TypeExpr::list(TypeExpr::INT)
    ));
    assert!(!is_supertype(&TypeExpr::list(TypeExpr::INT), &TypeExpr::INT));
}

#[test]
fn deeply_nested_types_compare_without_overflow() {
    let mut declared = int_or_float();
    let mut observed = TypeExpr::INT;
    for _ in 0..2_000 {
        declared = TypeExpr::list(declared);
        observed = TypeExpr::list(observed);
    }
    assert!(is_supertype(&declared, &observed));
    assert!(!is_supertype(&observed, &declared));
}
