//! Lexer for annotation strings using logos.

use std::fmt;

use logos::Logos;

use crate::{ParseError, Span};

/// Raw token from logos.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token(",")]
    Comma,
    #[token("|")]
    Pipe,
    #[token("...")]
    Ellipsis,
    #[token(".")]
    Dot,

    // Metadata literals, only meaningful inside `Annotated[...]`
    #[regex(r#""([^"\\]|\\.)*""#)]
    #[regex(r"'([^'\\]|\\.)*'")]
    Str,
    #[regex(r"-?[0-9][0-9_]*(\.[0-9]+)?")]
    Number,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Token kind after lexing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum TokenKind {
    LBracket,
    RBracket,
    LParen,
    RParen,
    Comma,
    Pipe,
    Ellipsis,
    Dot,
    /// String or number literal.
    Literal,
    Ident,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::Comma => ",",
            TokenKind::Pipe => "|",
            TokenKind::Ellipsis => "...",
            TokenKind::Dot => ".",
            TokenKind::Literal => "literal",
            TokenKind::Ident => "identifier",
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

/// Lex an annotation into tokens.
///
/// Fails on the first character that starts no token.
pub(crate) fn lex(source: &str) -> Result<Vec<Token>, ParseError> {
    let mut tokens = Vec::new();
    let mut logos = RawToken::lexer(source);

    while let Some(result) = logos.next() {
        let span = Span::from(logos.span());
        let Ok(raw) = result else {
            return Err(ParseError::UnknownCharacter {
                found: logos.slice().to_owned(),
                span,
            });
        };
        tokens.push(Token {
            kind: convert_token(raw),
            span,
        });
    }

    Ok(tokens)
}

fn convert_token(raw: RawToken) -> TokenKind {
    match raw {
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Pipe => TokenKind::Pipe,
        RawToken::Ellipsis => TokenKind::Ellipsis,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Str | RawToken::Number => TokenKind::Literal,
        RawToken::Ident => TokenKind::Ident,
    }
}
