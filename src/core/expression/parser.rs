//! Relaxed parser for SPDX-style license expressions
//!
//! ```text
//! expr   := and_expr ("OR" and_expr)*
//! and_expr := clause ("AND" clause)*
//! clause := "(" expr ")" | words ["+"] ["WITH" words]
//! ```
//!
//! `AND` binds tighter than `OR`. Consecutive non-keyword words form a single
//! license name, so `Apache License 2.0 OR MIT` is two leaves. Every leaf goes
//! through a [`LicenseVisitor`] as it is built.
//!
//! [`parse`] never fails: malformed input becomes [`LicenseNode::NoAssertion`].
//! Use [`try_parse`] to see why an expression was rejected. Parenthesis
//! nesting and operator count are capped so the tree stays shallow enough
//! to walk recursively.

use thiserror::Error;

use super::token::{Span, Token, TokenKind, tokenize};
use crate::core::models::{LicenseLeaf, LicenseNode, NOASSERTION};
use crate::core::ports::LicenseVisitor;

/// Deepest parenthesis nesting accepted
pub const MAX_NESTING: usize = 64;

/// Most `AND`/`OR` operators accepted in one expression
pub const MAX_OPERATORS: usize = 1024;

/// Why an expression could not be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ExpressionError {
    /// Nothing but whitespace
    #[error("empty expression")]
    Empty,

    /// A token that cannot appear at this position
    #[error("unexpected `{token}` at {span}")]
    Unexpected {
        /// The offending token, as written
        token: String,
        /// Where it was found
        span: Span,
    },

    /// Input ended where an operand was expected
    #[error("unexpected end of expression")]
    UnexpectedEnd,

    /// A `(` without its `)`
    #[error("unclosed parenthesis opened at {0}")]
    Unclosed(Span),

    /// `WITH` not followed by an exception name
    #[error("missing exception after WITH at {0}")]
    MissingException(Span),

    /// Parentheses nested deeper than [`MAX_NESTING`]
    #[error("parentheses nested deeper than {limit} at {0}", limit = MAX_NESTING)]
    TooDeep(Span),

    /// More than [`MAX_OPERATORS`] operators
    #[error("more than {limit} operators", limit = MAX_OPERATORS)]
    TooManyOperators,
}

/// An expression that is either still text or already parsed
#[derive(Debug, Clone, Copy)]
pub enum ExpressionSource<'a> {
    /// Raw expression text
    Text(&'a str),
    /// A tree that is used as-is
    Tree(&'a LicenseNode),
}

impl<'a> From<&'a str> for ExpressionSource<'a> {
    fn from(text: &'a str) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a String> for ExpressionSource<'a> {
    fn from(text: &'a String) -> Self {
        Self::Text(text)
    }
}

impl<'a> From<&'a LicenseNode> for ExpressionSource<'a> {
    fn from(tree: &'a LicenseNode) -> Self {
        Self::Tree(tree)
    }
}

/// Parse an expression, degrading to `NoAssertion` on any syntax error
///
/// Already-parsed trees pass through unchanged (the visitor is not
/// re-applied).
pub fn parse<'a, V>(source: impl Into<ExpressionSource<'a>>, visitor: &V) -> LicenseNode
where
    V: LicenseVisitor + ?Sized,
{
    match source.into() {
        ExpressionSource::Tree(tree) => tree.clone(),
        ExpressionSource::Text(text) => try_parse(text, visitor).unwrap_or_else(|err| {
            log::debug!("treating {text:?} as {NOASSERTION}: {err}");
            LicenseNode::NoAssertion
        }),
    }
}

/// Parse an expression, reporting syntax errors
pub fn try_parse<V>(text: &str, visitor: &V) -> Result<LicenseNode, ExpressionError>
where
    V: LicenseVisitor + ?Sized,
{
    let tokens = tokenize(text);
    if tokens.is_empty() {
        return Err(ExpressionError::Empty);
    }

    let mut parser = Parser {
        tokens: &tokens,
        pos: 0,
        nesting: 0,
        operators: 0,
        visitor,
    };
    let tree = parser.parse_or()?;
    match parser.peek() {
        None => Ok(tree),
        Some(token) => Err(unexpected(token)),
    }
}

struct Parser<'t, 'v, V: ?Sized> {
    tokens: &'t [Token],
    pos: usize,
    nesting: usize,
    operators: usize,
    visitor: &'v V,
}

impl<V: LicenseVisitor + ?Sized> Parser<'_, '_, V> {
    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.pos);
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn eat_operator(&mut self, kind: &TokenKind) -> Result<bool, ExpressionError> {
        if !self.eat(kind) {
            return Ok(false);
        }
        self.operators += 1;
        if self.operators > MAX_OPERATORS {
            return Err(ExpressionError::TooManyOperators);
        }
        Ok(true)
    }

    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.peek().is_some_and(|t| &t.kind == kind) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn parse_or(&mut self) -> Result<LicenseNode, ExpressionError> {
        let mut left = self.parse_and()?;
        while self.eat_operator(&TokenKind::Or)? {
            let right = self.parse_and()?;
            left = LicenseNode::or(left, right);
        }
        Ok(left)
    }

    fn parse_and(&mut self) -> Result<LicenseNode, ExpressionError> {
        let mut left = self.parse_clause()?;
        while self.eat_operator(&TokenKind::And)? {
            let right = self.parse_clause()?;
            left = LicenseNode::and(left, right);
        }
        Ok(left)
    }

    fn parse_clause(&mut self) -> Result<LicenseNode, ExpressionError> {
        let token = self.advance().cloned().ok_or(ExpressionError::UnexpectedEnd)?;
        match token.kind {
            TokenKind::OpenParen => {
                if self.nesting == MAX_NESTING {
                    return Err(ExpressionError::TooDeep(token.span));
                }
                self.nesting += 1;
                let inner = self.parse_or()?;
                self.nesting -= 1;
                if self.eat(&TokenKind::CloseParen) {
                    Ok(inner)
                } else {
                    Err(ExpressionError::Unclosed(token.span))
                }
            },
            TokenKind::Word { text, plus } => {
                let (license, plus) = self.words(text, plus);
                let exception = if self.eat(&TokenKind::With) {
                    match self.advance().cloned() {
                        Some(Token {
                            kind: TokenKind::Word { text, plus },
                            ..
                        }) => {
                            let (name, plus) = self.words(text, plus);
                            Some(if plus { format!("{name}+") } else { name })
                        },
                        _ => return Err(ExpressionError::MissingException(token.span)),
                    }
                } else {
                    None
                };
                Ok(self.leaf(&license, plus, exception.as_deref()))
            },
            _ => Err(unexpected(&token)),
        }
    }

    /// Join a run of words into one name; only the last word's `+` is kept as a flag
    fn words(&mut self, first: String, first_plus: bool) -> (String, bool) {
        let mut name = first;
        let mut plus = first_plus;
        while let Some(TokenKind::Word {
            text,
            plus: next_plus,
        }) = self.peek().map(|t| t.kind.clone())
        {
            if plus {
                name.push('+');
            }
            name.push(' ');
            name.push_str(&text);
            plus = next_plus;
            self.pos += 1;
        }
        (name, plus)
    }

    fn leaf(&self, license: &str, plus: bool, exception: Option<&str>) -> LicenseNode {
        if license.eq_ignore_ascii_case(NOASSERTION) {
            return LicenseNode::NoAssertion;
        }
        let Some(license) = self.visitor.visit_license(license) else {
            log::debug!("unknown license {license:?}");
            return LicenseNode::NoAssertion;
        };
        if license == NOASSERTION {
            return LicenseNode::NoAssertion;
        }

        let exception = exception.map(|raw| {
            self.visitor.visit_exception(raw).unwrap_or_else(|| {
                log::debug!("unknown exception {raw:?}");
                NOASSERTION.to_string()
            })
        });

        LicenseNode::Leaf(LicenseLeaf {
            license,
            plus,
            exception,
        })
    }
}

fn unexpected(token: &Token) -> ExpressionError {
    ExpressionError::Unexpected {
        token: token.kind.to_string(),
        span: token.span,
    }
}
