//! Parse error types.
//!
//! Every grammar violation is fatal: the parser stops at the first error
//! and returns it with the offending token and, where it helps, the token
//! that followed it.

use std::fmt;

use cddl_ir::{Span, TokenKind};

/// Stable, searchable error codes.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    /// A rule does not start with an identifier.
    E1001,
    /// Rule name not followed by `=`.
    E1002,
    /// Member key is neither an identifier nor a string.
    E1003,
    /// Missing `:` or `=>` between key and value.
    E1004,
    /// Token cannot start a type.
    E1005,
    /// Expected a non-negative integer.
    E1006,
    /// A specific token was required.
    E1007,
    /// A `{`, `(` or `[` body was never closed.
    E1008,
    /// Input ended in the middle of a construct.
    E1009,
    /// Segments, ranges or tags nested past the parser's limit.
    E1010,
}

impl ErrorCode {
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E1010 => "E1010",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What went wrong, with the tokens involved.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    #[error("expected a rule name, found {found}")]
    ExpectedRuleName { found: TokenKind },

    #[error("expected `=` after rule name `{rule}`, found {found}")]
    MissingAssignOperator { rule: String, found: TokenKind },

    #[error("expected a property name (identifier or string), found {found}")]
    ExpectedPropertyName { found: TokenKind },

    #[error("expected `:` or `=>` after property `{property}`, found {found}")]
    ExpectedSeparator { property: String, found: TokenKind },

    #[error("invalid property type {found}")]
    InvalidPropertyType { found: TokenKind },

    #[error("expected {expected}, found {found}")]
    ExpectedNumber {
        expected: &'static str,
        found: TokenKind,
    },

    #[error("expected {expected}, found {found}")]
    UnexpectedToken {
        expected: &'static str,
        found: TokenKind,
    },

    #[error("unclosed {open} opened at {open_span}: reached end of file while looking for {expected_close}")]
    UnclosedSegment {
        open: TokenKind,
        open_span: Span,
        expected_close: TokenKind,
    },

    #[error("unexpected end of file, expected {expected}")]
    UnexpectedEof { expected: &'static str },

    #[error("nesting exceeds the limit of {limit} levels")]
    NestingTooDeep { limit: u32 },
}

impl ParseErrorKind {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::ExpectedRuleName { .. } => ErrorCode::E1001,
            Self::MissingAssignOperator { .. } => ErrorCode::E1002,
            Self::ExpectedPropertyName { .. } => ErrorCode::E1003,
            Self::ExpectedSeparator { .. } => ErrorCode::E1004,
            Self::InvalidPropertyType { .. } => ErrorCode::E1005,
            Self::ExpectedNumber { .. } => ErrorCode::E1006,
            Self::UnexpectedToken { .. } => ErrorCode::E1007,
            Self::UnclosedSegment { .. } => ErrorCode::E1008,
            Self::UnexpectedEof { .. } => ErrorCode::E1009,
            Self::NestingTooDeep { .. } => ErrorCode::E1010,
        }
    }

    /// Short headline for error reports.
    pub fn title(&self) -> &'static str {
        match self {
            Self::ExpectedRuleName { .. } => "EXPECTED RULE",
            Self::MissingAssignOperator { .. } => "MISSING `=`",
            Self::ExpectedPropertyName { .. } => "EXPECTED PROPERTY NAME",
            Self::ExpectedSeparator { .. } => "MISSING SEPARATOR",
            Self::InvalidPropertyType { .. } => "INVALID TYPE",
            Self::ExpectedNumber { .. } => "EXPECTED NUMBER",
            Self::UnexpectedToken { .. } => "UNEXPECTED TOKEN",
            Self::UnclosedSegment { .. } => "UNCLOSED DELIMITER",
            Self::UnexpectedEof { .. } => "UNEXPECTED END OF FILE",
            Self::NestingTooDeep { .. } => "NESTING TOO DEEP",
        }
    }
}

/// A syntax error. Aborts the parse; no partial AST is returned.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// Location of the offending token.
    pub span: Span,
    /// The token after the offending one, for context.
    pub peek: Option<TokenKind>,
}

impl ParseError {
    #[cold]
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError {
            kind,
            span,
            peek: None,
        }
    }

    #[must_use]
    pub fn with_peek(mut self, peek: TokenKind) -> Self {
        self.peek = Some(peek);
        self
    }

    #[inline]
    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    /// Three-line report: `error[CODE]: TITLE`, the `line:col` of the
    /// span within `source`, then the message.
    pub fn render(&self, source: &str) -> String {
        let (line, col) = self.span.line_col(source);
        format!(
            "error[{}]: {}\n  --> {line}:{col}\n  {}",
            self.code(),
            self.kind.title(),
            self.kind
        )
    }
}
