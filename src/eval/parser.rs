//! Recursive descent evaluator for arithmetic expressions
//!
//! Precedence, lowest first:
//!
//! ```text
//! expr    → term (('+' | '-') term)*
//! term    → unary (('*' | '/') unary)*
//! unary   → ('-' | '+')+ primary | power
//! power   → primary ('**' unary)?
//! primary → number | '(' expr ')'
//! ```
//!
//! `**` is right-associative and its exponent may carry a sign (`2**-1`),
//! but a signed operand may not be the base of `**`: `-2**2` is rejected and
//! must be written `(-2)**2` or `-(2**2)`. Adjacent `--` or `++` are rejected
//! as well. Arithmetic is IEEE `f64`: division by zero yields an infinity or
//! NaN rather than an error.

use super::error::EvalError;
use super::lexer::{Lexer, Token, TokenKind};

/// Maximum nesting of parentheses and `**` exponents
pub const MAX_DEPTH: usize = 256;

/// Evaluate an already power-normalized expression
pub fn evaluate_normalized(input: &str) -> Result<f64, EvalError> {
    let tokens: Vec<_> = Lexer::new(input).collect();
    if let Some(bad) = tokens.iter().find(|t| t.kind == TokenKind::Error) {
        return Err(EvalError::InvalidToken {
            text: bad.text.to_string(),
            offset: bad.offset.into(),
        });
    }
    if let Some(pair) = tokens.windows(2).find(|pair| is_doubled_sign(&pair[0], &pair[1])) {
        return Err(Evaluator::unexpected(&pair[1]));
    }

    let mut evaluator = Evaluator::new(&tokens);
    let value = evaluator.expr()?;
    evaluator.finish()?;
    Ok(value)
}

/// `--` or `++` written without a gap
fn is_doubled_sign(first: &Token<'_>, second: &Token<'_>) -> bool {
    matches!(first.kind, TokenKind::Minus | TokenKind::Plus)
        && first.kind == second.kind
        && u32::from(second.offset) == u32::from(first.offset) + 1
}

/// `base ** exponent`, except that `±1 ** ±Infinity` and `±1 ** NaN` are NaN
fn raise(base: f64, exponent: f64) -> f64 {
    if base.abs() == 1.0 && !exponent.is_finite() {
        return f64::NAN;
    }
    base.powf(exponent)
}

/// The evaluator state
struct Evaluator<'a> {
    tokens: &'a [Token<'a>],
    pos: usize,
    depth: usize,
}

impl<'a> Evaluator<'a> {
    fn new(tokens: &'a [Token<'a>]) -> Self {
        Self {
            tokens,
            pos: 0,
            depth: 0,
        }
    }

    // =========================================================================
    // Token inspection
    // =========================================================================

    fn current(&self) -> Option<&'a Token<'a>> {
        self.tokens.get(self.pos)
    }

    fn at(&self, kind: TokenKind) -> bool {
        self.current().is_some_and(|t| t.kind == kind)
    }

    fn bump(&mut self) -> Option<&'a Token<'a>> {
        let token = self.current()?;
        self.pos += 1;
        Some(token)
    }

    fn eat(&mut self, kind: TokenKind) -> bool {
        if self.at(kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn unexpected(token: &Token<'_>) -> EvalError {
        EvalError::UnexpectedToken {
            text: token.text.to_string(),
            offset: token.offset.into(),
        }
    }

    /// All tokens must be consumed by the top-level expression
    fn finish(&self) -> Result<(), EvalError> {
        match self.current() {
            Some(token) => Err(Self::unexpected(token)),
            None => Ok(()),
        }
    }

    /// Enter one nesting level opened by `token`
    fn descend(&mut self, token: &Token<'_>) -> Result<(), EvalError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(EvalError::TooDeep {
                offset: token.offset.into(),
            });
        }
        Ok(())
    }

    fn ascend(&mut self) {
        self.depth -= 1;
    }

    // =========================================================================
    // Grammar
    // =========================================================================

    fn expr(&mut self) -> Result<f64, EvalError> {
        let mut value = self.term()?;
        loop {
            if self.eat(TokenKind::Plus) {
                value += self.term()?;
            } else if self.eat(TokenKind::Minus) {
                value -= self.term()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn term(&mut self) -> Result<f64, EvalError> {
        let mut value = self.unary()?;
        loop {
            if self.eat(TokenKind::Star) {
                value *= self.unary()?;
            } else if self.eat(TokenKind::Slash) {
                value /= self.unary()?;
            } else {
                return Ok(value);
            }
        }
    }

    fn unary(&mut self) -> Result<f64, EvalError> {
        let mut signed = false;
        let mut negate = false;
        loop {
            if self.eat(TokenKind::Minus) {
                negate = !negate;
            } else if !self.eat(TokenKind::Plus) {
                break;
            }
            signed = true;
        }
        if !signed {
            return self.power();
        }

        let value = self.primary()?;
        if let Some(token) = self.current().filter(|t| t.kind == TokenKind::StarStar) {
            return Err(Self::unexpected(token));
        }
        Ok(if negate { -value } else { value })
    }

    fn power(&mut self) -> Result<f64, EvalError> {
        let base = self.primary()?;
        let Some(op) = self.current().filter(|t| t.kind == TokenKind::StarStar) else {
            return Ok(base);
        };
        self.pos += 1;
        self.descend(op)?;
        let exponent = self.unary()?;
        self.ascend();
        Ok(raise(base, exponent))
    }

    fn primary(&mut self) -> Result<f64, EvalError> {
        let token = self.bump().ok_or(EvalError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::Number => token.text.parse().map_err(|_| EvalError::InvalidNumber {
                text: token.text.to_string(),
                offset: token.offset.into(),
            }),
            TokenKind::LParen => {
                self.descend(token)?;
                let value = self.expr()?;
                self.ascend();
                if self.eat(TokenKind::RParen) {
                    Ok(value)
                } else {
                    match self.current() {
                        Some(stray) => Err(Self::unexpected(stray)),
                        None => Err(EvalError::UnclosedParen {
                            offset: token.offset.into(),
                        }),
                    }
                }
            }
            _ => Err(Self::unexpected(token)),
        }
    }
}
