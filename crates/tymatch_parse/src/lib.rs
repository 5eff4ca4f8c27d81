//! Parser for type annotation strings.
//!
//! Turns the textual form of a declared type into a [`TypeExpr`]:
//!
//! ```text
//! parse_annotation("list[int | float]")
//! parse_annotation("dict[str, tuple[int, ...]]")
//! parse_annotation("Annotated[Optional[B], \"the b field\"]")
//! ```
//!
//! Builtins are `int float bool str bytes complex None`; `Never` is the
//! empty union; any other name, dotted or not, is a user-defined class.
//! `Union[...]`, `Optional[T]` and the `typing`-style capitalized container
//! names are accepted alongside the native spellings.

mod error;
mod lexer;
mod parser;

pub use error::{ParseError, Span};

use tymatch_ir::TypeExpr;

/// Parse one annotation. The whole input must be consumed.
#[tracing::instrument(level = "trace")]
pub fn parse_annotation(source: &str) -> Result<TypeExpr, ParseError> {
    parser::Parser::new(source)?.parse()
}
