use crate::foundation::error::{Ui4Error, Ui4Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Span {
    pub(crate) start: usize,
    pub(crate) end: usize,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Token {
    pub(crate) kind: TokenKind,
    pub(crate) span: Span,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum TokenKind {
    Ident(String),
    Number(f64),

    LParen,
    RParen,
    Comma,
    Dot,

    Plus,
    Minus,
    Star,
    Slash,

    Eq,
    Lt,
    Gt,

    Amp,
    Question,
    Colon,
    Semicolon,

    Eof,
}

pub(crate) fn lex(input: &str) -> Ui4Result<Vec<Token>> {
    let mut out = Vec::new();
    let bytes = input.as_bytes();
    let mut i = 0usize;

    while i < bytes.len() {
        let c = bytes[i] as char;
        if c.is_ascii_whitespace() {
            i += 1;
            continue;
        }

        let start = i;

        // Number: [0-9]+(.[0-9]+)? or .[0-9]+
        if c.is_ascii_digit()
            || (c == '.' && i + 1 < bytes.len() && bytes[i + 1].is_ascii_digit())
        {
            if c == '.' {
                i += 1;
            } else {
                while i < bytes.len() && bytes[i].is_ascii_digit() {
                    i += 1;
                }
                if i + 1 < bytes.len() && bytes[i] == b'.' && bytes[i + 1].is_ascii_digit() {
                    i += 1;
                }
            }
            while i < bytes.len() && bytes[i].is_ascii_digit() {
                i += 1;
            }
            let v: f64 = input[start..i]
                .parse()
                .map_err(|_| Ui4Error::parse(start, "invalid number"))?;
            out.push(Token {
                kind: TokenKind::Number(v),
                span: Span { start, end: i },
            });
            continue;
        }

        if c.is_ascii_alphabetic() || c == '_' {
            i += 1;
            while i < bytes.len() && (bytes[i].is_ascii_alphanumeric() || bytes[i] == b'_') {
                i += 1;
            }
            out.push(Token {
                kind: TokenKind::Ident(input[start..i].to_owned()),
                span: Span { start, end: i },
            });
            continue;
        }

        let kind = match c {
            '(' => TokenKind::LParen,
            ')' => TokenKind::RParen,
            ',' => TokenKind::Comma,
            '.' => TokenKind::Dot,
            '+' => TokenKind::Plus,
            '-' => TokenKind::Minus,
            '*' => TokenKind::Star,
            '/' => TokenKind::Slash,
            '=' => TokenKind::Eq,
            '<' => TokenKind::Lt,
            '>' => TokenKind::Gt,
            '&' => TokenKind::Amp,
            '?' => TokenKind::Question,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            _ => {
                let ch = input[start..].chars().next().unwrap_or(c);
                return Err(Ui4Error::parse(start, format!("unexpected character '{ch}'")));
            }
        };
        i += 1;
        out.push(Token {
            kind,
            span: Span { start, end: i },
        });
    }

    out.push(Token {
        kind: TokenKind::Eof,
        span: Span {
            start: input.len(),
            end: input.len(),
        },
    });

    Ok(out)
}

#[cfg(test)]
#[path = "../../tests/unit/wire/lexer.rs"]
mod tests;
