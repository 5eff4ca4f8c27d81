//! Parse errors and source spans.

use std::fmt;
use std::ops::Range;

use thiserror::Error;

/// Byte range into the annotation source.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    #[inline]
    pub const fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    /// Zero-width span at `offset`.
    #[inline]
    pub const fn point(offset: usize) -> Self {
        Span {
            start: offset,
            end: offset,
        }
    }

    /// Smallest span covering both.
    #[inline]
    #[must_use]
    pub fn merge(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Span::new(range.start, range.end)
    }
}

impl fmt::Debug for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Why an annotation string could not be parsed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// A character that starts no token.
    #[error("unknown character {found:?} at {span}")]
    UnknownCharacter { found: String, span: Span },

    #[error("expected {expected}, found `{found}` at {span}")]
    UnexpectedToken {
        expected: &'static str,
        found: String,
        span: Span,
    },

    #[error("expected {expected}, found end of input at {span}")]
    UnexpectedEnd { expected: &'static str, span: Span },

    /// A container received the wrong number of type arguments.
    #[error("`{container}` takes {expected}, found {found} at {span}")]
    ArgumentCount {
        container: &'static str,
        expected: &'static str,
        found: usize,
        span: Span,
    },

    /// `...` anywhere but the last argument of a non-empty `tuple[...]`.
    #[error("`...` is only allowed as the last argument of `tuple` at {span}")]
    MisplacedEllipsis { span: Span },

    /// `()` or metadata where a type was expected.
    #[error("{what} is not a type at {span}")]
    NotAType { what: &'static str, span: Span },
}

impl ParseError {
    /// Location of the error in the source.
    pub fn span(&self) -> Span {
        match self {
            ParseError::UnknownCharacter { span, .. }
            | ParseError::UnexpectedToken { span, .. }
            | ParseError::UnexpectedEnd { span, .. }
            | ParseError::ArgumentCount { span, .. }
            | ParseError::MisplacedEllipsis { span }
            | ParseError::NotAType { span, .. } => *span,
        }
    }
}
