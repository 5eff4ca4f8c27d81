use pretty_assertions::assert_eq;

use crate::{ContainerKind, TypeExpr};

#[test]
fn atomic_names() {
    assert_eq!(TypeExpr::INT.to_string(), "int");
    assert_eq!(TypeExpr::NONE.to_string(), "None");
    assert_eq!(TypeExpr::BYTES.to_string(), "bytes");
    assert_eq!(TypeExpr::class("InnerA").to_string(), "InnerA");
}

#[test]
fn unions_print_in_canonical_order() {
    let ty = TypeExpr::union([TypeExpr::STR, TypeExpr::INT]);
    assert_eq!(ty.to_string(), "int | str");
    assert_eq!(TypeExpr::never().to_string(), "Never");
}

#[test]
fn containers() {
    let element = TypeExpr::union([TypeExpr::INT, TypeExpr::FLOAT]);
    assert_eq!(TypeExpr::list(element.clone()).to_string(), "list[int | float]");
    assert_eq!(TypeExpr::set(TypeExpr::STR).to_string(), "set[str]");
    assert_eq!(
        TypeExpr::dict(element, TypeExpr::union([TypeExpr::STR, TypeExpr::BYTES])).to_string(),
        "dict[int | float, str | bytes]"
    );
}

#[test]
fn tuples() {
    assert_eq!(
        TypeExpr::tuple([TypeExpr::INT, TypeExpr::STR]).to_string(),
        "tuple[int, str]"
    );
    assert_eq!(TypeExpr::tuple(Vec::<TypeExpr>::new()).to_string(), "tuple[()]");
    assert_eq!(
        TypeExpr::variadic_tuple(Vec::<TypeExpr>::new(), TypeExpr::INT).to_string(),
        "tuple[int, ...]"
    );
    assert_eq!(
        TypeExpr::variadic_tuple([TypeExpr::STR], TypeExpr::INT).to_string(),
        "tuple[str, int, ...]"
    );
}

#[test]
fn empty_sentinels() {
    assert_eq!(TypeExpr::empty(ContainerKind::Sequence).to_string(), "list[()]");
    assert_eq!(TypeExpr::empty(ContainerKind::Set).to_string(), "set[()]");
    assert_eq!(TypeExpr::empty(ContainerKind::Mapping).to_string(), "dict[(), ()]");
    assert_eq!(TypeExpr::empty(ContainerKind::FixedTuple).to_string(), "tuple[()]");
}

#[test]
fn deeply_nested_list_prints() {
    let mut ty = TypeExpr::INT;
    for _ in 0..2_000 {
        ty = TypeExpr::list(ty);
    }
    let rendered = ty.to_string();
    assert_eq!(rendered.len(), "list[]".len() * 2_000 + "int".len());
    assert!(rendered.starts_with("list[list["));
    assert!(rendered.ends_with(&format!("int{}", "]".repeat(2_000))));
}
