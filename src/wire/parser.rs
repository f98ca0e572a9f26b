use crate::animation::ease::Ease;
use crate::animation::spec::{AnimationSpec, Direction, Iterations};
use crate::constraint::attribute::Attribute;
use crate::constraint::condition::Condition;
use crate::constraint::expr::{AnchorRef, BinaryOp, Expr, Func};
use crate::constraint::rule::{Comparison, Constraint};
use crate::foundation::error::{Ui4Error, Ui4Result};
use crate::foundation::ids::ViewId;
use crate::wire::lexer::{Span, Token, TokenKind, lex};

/// Parse a `ui4` attribute value back into constraints, in wire order.
pub fn parse_ui4(src: &str) -> Ui4Result<Vec<Constraint>> {
    let tokens = lex(src)?;
    let mut p = Parser {
        src,
        tokens,
        pos: 0,
    };
    let mut out = Vec::new();
    loop {
        if p.consume(&TokenKind::Semicolon) {
            continue;
        }
        if p.peek().kind == TokenKind::Eof {
            break;
        }
        out.push(p.parse_clause()?);
        if !p.consume(&TokenKind::Semicolon) {
            p.expect(&TokenKind::Eof)?;
            break;
        }
    }
    Ok(out)
}

struct Parser<'a> {
    src: &'a str,
    tokens: Vec<Token>,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn peek(&self) -> &Token {
        &self.tokens[self.pos.min(self.tokens.len() - 1)]
    }

    fn bump(&mut self) -> Token {
        let t = self.peek().clone();
        if self.pos < self.tokens.len() - 1 {
            self.pos += 1;
        }
        t
    }

    fn span(&self) -> Span {
        self.peek().span
    }

    fn error<T>(&self, message: impl Into<String>) -> Ui4Result<T> {
        Err(Ui4Error::parse(self.span().start, message))
    }

    fn expect(&mut self, kind: &TokenKind) -> Ui4Result<()> {
        if &self.peek().kind == kind {
            self.bump();
            Ok(())
        } else {
            self.error(format!("expected {kind:?}, found {:?}", self.peek().kind))
        }
    }

    fn consume(&mut self, kind: &TokenKind) -> bool {
        if &self.peek().kind == kind {
            self.bump();
            true
        } else {
            false
        }
    }

    /// Whether a `?` appears before the end of the current clause.
    fn clause_has_guard(&self) -> bool {
        self.tokens[self.pos..]
            .iter()
            .take_while(|t| !matches!(t.kind, TokenKind::Semicolon | TokenKind::Eof))
            .any(|t| t.kind == TokenKind::Question)
    }

    fn parse_clause(&mut self) -> Ui4Result<Constraint> {
        let condition = if self.clause_has_guard() {
            let c = self.parse_condition()?;
            self.expect(&TokenKind::Question)?;
            Some(c)
        } else {
            None
        };

        let target = self.parse_attribute()?;
        let comparison = self.parse_comparison()?;
        let value = self.parse_expr()?;
        let animation = if self.consume(&TokenKind::Colon) {
            Some(self.parse_animation()?)
        } else {
            None
        };

        Ok(Constraint::new(target, comparison, value)
            .with_condition(condition)
            .with_animation(animation))
    }

    fn parse_attribute(&mut self) -> Ui4Result<Attribute> {
        let t = self.bump();
        match t.kind {
            TokenKind::Ident(name) => Attribute::from_name(&name)
                .map_err(|_| Ui4Error::parse(t.span.start, format!("unknown attribute '{name}'"))),
            other => Err(Ui4Error::parse(
                t.span.start,
                format!("expected attribute, found {other:?}"),
            )),
        }
    }

    fn parse_comparison(&mut self) -> Ui4Result<Comparison> {
        let c = match self.peek().kind {
            TokenKind::Eq => Comparison::Eq,
            TokenKind::Lt => Comparison::Lt,
            TokenKind::Gt => Comparison::Gt,
            _ => return self.error(format!("expected '=', '<' or '>', found {:?}", self.peek().kind)),
        };
        self.bump();
        Ok(c)
    }

    fn parse_condition(&mut self) -> Ui4Result<Condition> {
        let mut parts = vec![self.parse_condition_part()?];
        while self.consume(&TokenKind::Amp) {
            parts.push(self.parse_condition_part()?);
        }
        Ok(if parts.len() == 1 {
            parts.remove(0)
        } else {
            Condition::All(parts)
        })
    }

    fn parse_condition_part(&mut self) -> Ui4Result<Condition> {
        if let TokenKind::Ident(name) = &self.peek().kind {
            let orientation = match name.as_str() {
                "portrait" => Some(true),
                "landscape" => Some(false),
                _ => None,
            };
            if let Some(is_portrait) = orientation {
                self.bump();
                let view = if self.consume(&TokenKind::LParen) {
                    let id = self.parse_view_id()?;
                    self.expect(&TokenKind::RParen)?;
                    Some(id)
                } else {
                    None
                };
                return Ok(if is_portrait {
                    Condition::Portrait(view)
                } else {
                    Condition::Landscape(view)
                });
            }
        }

        let lhs = self.parse_expr()?;
        let comparison = match self.peek().kind {
            TokenKind::Lt => Comparison::Lt,
            TokenKind::Gt => Comparison::Gt,
            _ => return self.error("expected '<' or '>' in condition"),
        };
        self.bump();
        let rhs = self.parse_expr()?;
        Ok(Condition::Compare {
            lhs,
            comparison,
            rhs,
        })
    }

    fn parse_view_id(&mut self) -> Ui4Result<ViewId> {
        let t = self.bump();
        match t.kind {
            TokenKind::Ident(name) => ViewId::parse(&name)
                .map_err(|_| Ui4Error::parse(t.span.start, format!("invalid view id '{name}'"))),
            other => Err(Ui4Error::parse(
                t.span.start,
                format!("expected view id, found {other:?}"),
            )),
        }
    }

    fn parse_expr(&mut self) -> Ui4Result<Expr> {
        let mut e = self.parse_factor()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => break,
            };
            self.bump();
            let r = self.parse_factor()?;
            e = Expr::binary(op, e, r);
        }
        Ok(e)
    }

    fn parse_factor(&mut self) -> Ui4Result<Expr> {
        let mut e = self.parse_primary()?;
        loop {
            let op = match self.peek().kind {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                _ => break,
            };
            self.bump();
            let r = self.parse_primary()?;
            e = Expr::binary(op, e, r);
        }
        Ok(e)
    }

    fn parse_primary(&mut self) -> Ui4Result<Expr> {
        let t = self.bump();
        match t.kind {
            TokenKind::Number(v) => Ok(Expr::Num(v)),
            TokenKind::Minus => match self.bump().kind {
                TokenKind::Number(v) => Ok(Expr::Num(-v)),
                _ => Err(Ui4Error::parse(t.span.start, "'-' must precede a number")),
            },
            TokenKind::LParen => {
                let e = self.parse_expr()?;
                self.expect(&TokenKind::RParen)?;
                Ok(e)
            }
            TokenKind::Ident(name) => match name.as_str() {
                "gap" => Ok(Expr::Gap),
                "min" | "max" => {
                    let func = if name == "min" { Func::Min } else { Func::Max };
                    self.expect(&TokenKind::LParen)?;
                    let mut args = vec![self.parse_expr()?];
                    while self.consume(&TokenKind::Comma) {
                        args.push(self.parse_expr()?);
                    }
                    self.expect(&TokenKind::RParen)?;
                    Ok(Expr::Call { func, args })
                }
                _ => {
                    let view = ViewId::parse(&name).map_err(|_| {
                        Ui4Error::parse(t.span.start, format!("unknown name '{name}'"))
                    })?;
                    self.expect(&TokenKind::Dot)?;
                    let attribute = self.parse_attribute()?;
                    Ok(Expr::Anchor(AnchorRef::new(view, attribute)))
                }
            },
            other => Err(Ui4Error::parse(
                t.span.start,
                format!("expected value, found {other:?}"),
            )),
        }
    }

    /// Comma-separated timing items up to the end of the clause. Times fill
    /// duration, start delay and end delay in that order; bare numbers and
    /// `inf` are iteration counts; direction names are directions; anything
    /// else is an easing function.
    fn parse_animation(&mut self) -> Ui4Result<AnimationSpec> {
        let mut spec = AnimationSpec::new();
        let mut times = 0;
        loop {
            let (text, start) = self.animation_item()?;
            if let Some(secs) = text.strip_suffix('s').and_then(|n| n.parse::<f64>().ok()) {
                match times {
                    0 => spec.duration = Some(secs),
                    1 => spec.start_delay = Some(secs),
                    2 => spec.end_delay = Some(secs),
                    _ => return Err(Ui4Error::parse(start, "too many time values")),
                }
                times += 1;
            } else if text == "inf" {
                spec.iterations = Some(Iterations::Infinite);
            } else if let Ok(n) = text.parse::<f64>() {
                spec.iterations = Some(Iterations::Count(n));
            } else if let Some(direction) = Direction::from_css_name(text) {
                spec.direction = Some(direction);
            } else {
                spec.ease = Some(Ease::from_css_name(text));
            }
            if !self.consume(&TokenKind::Comma) {
                break;
            }
        }
        Ok(spec)
    }

    /// Source text of one animation item, with parenthesized commas kept.
    fn animation_item(&mut self) -> Ui4Result<(&'a str, usize)> {
        let start = self.span().start;
        let mut end = start;
        let mut depth = 0usize;
        loop {
            match self.peek().kind {
                TokenKind::Eof | TokenKind::Semicolon => break,
                TokenKind::Comma if depth == 0 => break,
                TokenKind::LParen => depth += 1,
                TokenKind::RParen => depth = depth.saturating_sub(1),
                _ => {}
            }
            end = self.bump().span.end;
        }
        if end == start {
            return self.error("expected animation value");
        }
        Ok((self.src[start..end].trim(), start))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/wire/parser.rs"]
mod tests;
