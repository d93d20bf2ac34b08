//! Lexer for CDDL using logos.
//!
//! Turns schema text into [`Token`]s. Whitespace is dropped; comments are
//! kept as tokens because the parser attaches them to members. Lexing never
//! fails: unrecognized input becomes a [`TokenKind::Error`] token and the
//! parser reports it where it lands.

use cddl_ir::{Span, Token, TokenKind, TokenList, TokenSource};
use logos::Logos;

/// Raw token from logos, before conversion to [`TokenKind`].
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
enum RawToken {
    #[regex(r";[^\n]*")]
    Comment,

    #[token("=")]
    Eq,
    #[token(">")]
    Gt,
    #[token("+")]
    Plus,
    #[token("/")]
    Slash,
    #[token("?")]
    Question,
    #[token("*")]
    Star,
    #[token(",")]
    Comma,
    #[token(".")]
    Dot,
    #[token(":")]
    Colon,
    #[token("^")]
    Caret,
    #[token("#")]
    Hash,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,

    #[regex(r"-?0x[0-9a-fA-F]+", |lex| parse_radix(lex.slice(), 16))]
    HexInt(i64),

    #[regex(r"-?0b[01]+", |lex| parse_radix(lex.slice(), 2))]
    BinInt(i64),

    #[regex(r"-?[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"-?[0-9]+\.[0-9]+([eE][+-]?[0-9]+)?", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r#""([^"\\]|\\.)*""#)]
    String,

    #[regex(r"[a-zA-Z@_$][a-zA-Z0-9@_$-]*")]
    Ident,
}

/// Parse `0x..`/`0b..` literals with an optional leading minus.
fn parse_radix(slice: &str, radix: u32) -> Option<i64> {
    let (negative, digits) = match slice.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, slice),
    };
    let value = i64::from_str_radix(&digits[2..], radix).ok()?;
    Some(if negative { -value } else { value })
}

/// Streaming tokenizer over a source string.
///
/// Yields every token followed by exactly one `Eof`. As a [`TokenSource`]
/// it keeps answering `Eof` once the input is exhausted; as an
/// [`Iterator`] it stops after the `Eof`.
pub struct Lexer<'src> {
    inner: logos::Lexer<'src, RawToken>,
    eof_span: Span,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            inner: RawToken::lexer(source),
            eof_span: Span::from_range_clamped(source.len()..source.len()),
            finished: false,
        }
    }

    fn eof(&self) -> Token {
        Token::new(TokenKind::Eof, self.eof_span)
    }
}

impl TokenSource for Lexer<'_> {
    fn next_token(&mut self) -> Token {
        if self.finished {
            return self.eof();
        }

        match self.inner.next() {
            Some(result) => {
                let span = Span::from_range_clamped(self.inner.span());
                let kind = match result {
                    Ok(raw) => convert_token(raw, self.inner.slice()),
                    Err(()) => TokenKind::Error,
                };
                Token::new(kind, span)
            }
            None => {
                self.finished = true;
                self.eof()
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }
        Some(self.next_token())
    }
}

/// Lex source code into a [`TokenList`] ending in `Eof`.
pub fn lex(source: &str) -> TokenList {
    let mut list = TokenList::new();
    for token in Lexer::new(source) {
        list.push(token);
    }
    list
}

fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Comment => TokenKind::Comment(slice.to_owned()),

        RawToken::Eq => TokenKind::Eq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::Plus => TokenKind::Plus,
        RawToken::Slash => TokenKind::Slash,
        RawToken::Question => TokenKind::Question,
        RawToken::Star => TokenKind::Star,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Dot => TokenKind::Dot,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Caret => TokenKind::Caret,
        RawToken::Hash => TokenKind::Hash,
        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,

        RawToken::Int(n) | RawToken::HexInt(n) | RawToken::BinInt(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::float(f),
        RawToken::String => {
            let content = &slice[1..slice.len() - 1];
            TokenKind::String(unescape_string(content))
        }
        RawToken::Ident => TokenKind::Ident(slice.to_owned()),
    }
}

/// Resolve backslash escapes. Unknown escapes are kept verbatim.
fn unescape_string(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            result.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => result.push('\n'),
            Some('t') => result.push('\t'),
            Some('r') => result.push('\r'),
            Some('"') => result.push('"'),
            Some('\\') => result.push('\\'),
            Some(other) => {
                result.push('\\');
                result.push(other);
            }
            None => result.push('\\'),
        }
    }

    result
}
