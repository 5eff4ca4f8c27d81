//! Recursive descent parser for type annotations.
//!
//! Grammar:
//!
//! ```text
//! annotation := union EOF
//! union      := primary ('|' primary)*
//! primary    := '(' union ')'
//!             | name ('[' arg (',' arg)* ']')?
//! name       := IDENT ('.' IDENT)*
//! arg        := union | '...' | '(' ')' | LITERAL
//! ```
//!
//! Which arguments a subscripted name accepts is checked after the bracket
//! is read, so every argument error points at the offending argument.

use tymatch_ir::{BaseType, TypeExpr};
use tymatch_stack::ensure_sufficient_stack;

use crate::lexer::{lex, Token, TokenKind};
use crate::{ParseError, Span};

/// One subscript argument before it is checked against its container.
enum Arg {
    Type(TypeExpr),
    Ellipsis(Span),
    /// `()`, the empty tuple marker.
    Unit(Span),
    /// A string or number literal.
    Literal(Span),
}

/// Names that take a subscript.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Constructor {
    List,
    Set,
    Dict,
    Tuple,
    Union,
    Optional,
    Annotated,
}

impl Constructor {
    fn name(self) -> &'static str {
        match self {
            Constructor::List => "list",
            Constructor::Set => "set",
            Constructor::Dict => "dict",
            Constructor::Tuple => "tuple",
            Constructor::Union => "Union",
            Constructor::Optional => "Optional",
            Constructor::Annotated => "Annotated",
        }
    }
}

/// Parser state.
pub(crate) struct Parser<'src> {
    source: &'src str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'src> Parser<'src> {
    pub(crate) fn new(source: &'src str) -> Result<Self, ParseError> {
        Ok(Parser {
            source,
            tokens: lex(source)?,
            pos: 0,
        })
    }

    /// Parse the whole source as one annotation.
    pub(crate) fn parse(mut self) -> Result<TypeExpr, ParseError> {
        let ty = self.parse_union()?;
        match self.current() {
            Some(token) => Err(self.unexpected(token, "`|` or end of input")),
            None => Ok(ty),
        }
    }

    // Cursor

    #[inline]
    fn current(&self) -> Option<Token> {
        self.tokens.get(self.pos).copied()
    }

    #[inline]
    fn peek_is(&self, kind: TokenKind) -> bool {
        self.tokens
            .get(self.pos + 1)
            .is_some_and(|token| token.kind == kind)
    }

    #[inline]
    fn advance(&mut self) {
        self.pos += 1;
    }

    /// Consume the current token if it is `kind`.
    fn eat(&mut self, kind: TokenKind) -> Option<Token> {
        let token = self.current().filter(|token| token.kind == kind)?;
        self.advance();
        Some(token)
    }

    fn expect(&mut self, kind: TokenKind, expected: &'static str) -> Result<Token, ParseError> {
        match self.current() {
            Some(token) if token.kind == kind => {
                self.advance();
                Ok(token)
            }
            Some(token) => Err(self.unexpected(token, expected)),
            None => Err(self.end_of_input(expected)),
        }
    }

    fn previous_end(&self) -> usize {
        self.pos
            .checked_sub(1)
            .and_then(|prev| self.tokens.get(prev))
            .map_or(0, |token| token.span.end)
    }

    fn slice(&self, span: Span) -> &'src str {
        self.source.get(span.start..span.end).unwrap_or_default()
    }

    fn unexpected(&self, token: Token, expected: &'static str) -> ParseError {
        ParseError::UnexpectedToken {
            expected,
            found: self.slice(token.span).to_owned(),
            span: token.span,
        }
    }

    fn end_of_input(&self, expected: &'static str) -> ParseError {
        ParseError::UnexpectedEnd {
            expected,
            span: Span::point(self.source.len()),
        }
    }

    // Grammar

    fn parse_union(&mut self) -> Result<TypeExpr, ParseError> {
        ensure_sufficient_stack(|| {
            let mut members = vec![self.parse_primary()?];
            while self.eat(TokenKind::Pipe).is_some() {
                members.push(self.parse_primary()?);
            }
            Ok(TypeExpr::union(members))
        })
    }

    fn parse_primary(&mut self) -> Result<TypeExpr, ParseError> {
        let Some(token) = self.current() else {
            return Err(self.end_of_input("a type"));
        };

        match token.kind {
            TokenKind::LParen if self.peek_is(TokenKind::RParen) => Err(ParseError::NotAType {
                what: "`()`",
                span: token.span,
            }),
            TokenKind::LParen => {
                self.advance();
                let inner = self.parse_union()?;
                self.expect(TokenKind::RParen, "`)`")?;
                Ok(inner)
            }
            TokenKind::Ident => self.parse_named(),
            _ => Err(self.unexpected(token, "a type")),
        }
    }

    /// `IDENT ('.' IDENT)*`, returned with its span.
    fn parse_name(&mut self) -> Result<(String, Span), ParseError> {
        let first = self.expect(TokenKind::Ident, "a type name")?;
        let mut name = self.slice(first.span).to_owned();
        let mut span = first.span;
        while self.eat(TokenKind::Dot).is_some() {
            let part = self.expect(TokenKind::Ident, "a name after `.`")?;
            name.push('.');
            name.push_str(self.slice(part.span));
            span = span.merge(part.span);
        }
        Ok((name, span))
    }

    fn parse_named(&mut self) -> Result<TypeExpr, ParseError> {
        let (name, span) = self.parse_name()?;

        let constructor = match name.as_str() {
            "list" | "List" => Constructor::List,
            "set" | "Set" => Constructor::Set,
            "dict" | "Dict" => Constructor::Dict,
            "tuple" | "Tuple" => Constructor::Tuple,
            "Union" => Constructor::Union,
            "Optional" => Constructor::Optional,
            "Annotated" => Constructor::Annotated,
            "Never" => return Ok(TypeExpr::never()),
            _ => {
                return Ok(match BaseType::builtin(&name) {
                    Some(base) => TypeExpr::Atomic(base),
                    None => TypeExpr::class(name),
                })
            }
        };

        let (args, span) = self.parse_arguments(span)?;
        match constructor {
            Constructor::List => single(constructor, args, span).map(TypeExpr::list),
            Constructor::Set => single(constructor, args, span).map(TypeExpr::set),
            Constructor::Optional => single(constructor, args, span).map(TypeExpr::optional),
            Constructor::Dict => {
                let types = types_only(args)?;
                let found = types.len();
                let mut types = types.into_iter();
                match (types.next(), types.next(), types.next()) {
                    (Some(key), Some(value), None) => Ok(TypeExpr::dict(key, value)),
                    _ => Err(ParseError::ArgumentCount {
                        container: constructor.name(),
                        expected: "a key and a value type",
                        found,
                        span,
                    }),
                }
            }
            Constructor::Tuple => tuple(args),
            Constructor::Annotated => annotated(args, span),
            Constructor::Union => types_only(args).map(TypeExpr::union),
        }
    }

    /// `'[' arg (',' arg)* ']'` after a subscriptable name. The returned span
    /// runs from the name through the closing bracket.
    fn parse_arguments(&mut self, name: Span) -> Result<(Vec<Arg>, Span), ParseError> {
        self.expect(TokenKind::LBracket, "`[`")?;
        let mut args = vec![self.parse_arg()?];
        while self.eat(TokenKind::Comma).is_some() {
            args.push(self.parse_arg()?);
        }
        let close = self.expect(TokenKind::RBracket, "`,` or `]`")?;
        Ok((args, name.merge(close.span)))
    }

    fn parse_arg(&mut self) -> Result<Arg, ParseError> {
        let Some(token) = self.current() else {
            return Err(self.end_of_input("a type argument"));
        };

        match token.kind {
            TokenKind::Ellipsis => {
                self.advance();
                Ok(Arg::Ellipsis(token.span))
            }
            TokenKind::Literal => {
                self.advance();
                Ok(Arg::Literal(token.span))
            }
            TokenKind::LParen if self.peek_is(TokenKind::RParen) => {
                self.advance();
                self.advance();
                Ok(Arg::Unit(Span::new(token.span.start, self.previous_end())))
            }
            _ => self.parse_union().map(Arg::Type),
        }
    }
}

/// Every argument must be a type.
fn types_only(args: Vec<Arg>) -> Result<Vec<TypeExpr>, ParseError> {
    args.into_iter()
        .map(|arg| match arg {
            Arg::Type(ty) => Ok(ty),
            Arg::Ellipsis(span) => Err(ParseError::MisplacedEllipsis { span }),
            Arg::Unit(span) => Err(ParseError::NotAType { what: "`()`", span }),
            Arg::Literal(span) => Err(ParseError::NotAType {
                what: "a literal",
                span,
            }),
        })
        .collect()
}

fn single(constructor: Constructor, args: Vec<Arg>, span: Span) -> Result<TypeExpr, ParseError> {
    let types = types_only(args)?;
    let found = types.len();
    let mut types = types.into_iter();
    match (types.next(), types.next()) {
        (Some(ty), None) => Ok(ty),
        _ => Err(ParseError::ArgumentCount {
            container: constructor.name(),
            expected: "one type",
            found,
            span,
        }),
    }
}

/// `tuple[()]`, `tuple[A, B]` or `tuple[A, R, ...]`.
fn tuple(mut args: Vec<Arg>) -> Result<TypeExpr, ParseError> {
    if let [Arg::Unit(_)] = args.as_slice() {
        return Ok(TypeExpr::tuple(Vec::<TypeExpr>::new()));
    }

    let Some(&Arg::Ellipsis(ellipsis)) = args.last() else {
        return types_only(args).map(TypeExpr::tuple);
    };
    args.pop();

    let mut prefix = types_only(args)?;
    match prefix.pop() {
        Some(repeated) => Ok(TypeExpr::variadic_tuple(prefix, repeated)),
        None => Err(ParseError::MisplacedEllipsis { span: ellipsis }),
    }
}

/// `Annotated[T, meta, ...]` keeps `T` and ignores the metadata.
fn annotated(args: Vec<Arg>, span: Span) -> Result<TypeExpr, ParseError> {
    let found = args.len();
    let mut args = args.into_iter();
    match (args.next(), found) {
        (Some(Arg::Type(ty)), 2..) => Ok(ty),
        (Some(Arg::Ellipsis(span)), _) => Err(ParseError::MisplacedEllipsis { span }),
        (Some(Arg::Unit(span)), _) => Err(ParseError::NotAType { what: "`()`", span }),
        (Some(Arg::Literal(span)), _) => Err(ParseError::NotAType {
            what: "a literal",
            span,
        }),
        _ => Err(ParseError::ArgumentCount {
            container: "Annotated",
            expected: "a type and at least one metadata argument",
            found,
            span,
        }),
    }
}
