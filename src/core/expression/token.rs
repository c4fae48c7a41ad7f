//! Tokens of a license expression

use std::fmt;

/// A span in the expression text (byte offsets)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Start byte offset
    pub start: usize,
    /// End byte offset
    pub end: usize,
}

impl Span {
    /// Create a new span
    #[must_use]
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Length of the span
    #[must_use]
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if span is empty
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

/// Kind of token
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    /// `(`
    OpenParen,
    /// `)`
    CloseParen,
    /// `AND` keyword (any case)
    And,
    /// `OR` keyword (any case)
    Or,
    /// `WITH` keyword (any case)
    With,
    /// Any other word; a trailing `+` is split off into `plus`
    Word {
        /// The word without its `+` suffix
        text: String,
        /// Whether the word ended in `+`
        plus: bool,
    },
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OpenParen => write!(f, "("),
            Self::CloseParen => write!(f, ")"),
            Self::And => write!(f, "AND"),
            Self::Or => write!(f, "OR"),
            Self::With => write!(f, "WITH"),
            Self::Word { text, plus } => write!(f, "{text}{}", if *plus { "+" } else { "" }),
        }
    }
}

/// A token with its position
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// Kind of token
    pub kind: TokenKind,
    /// Span in the source text
    pub span: Span,
}

impl Token {
    /// Create a new token
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

/// Split an expression into tokens
///
/// Whitespace and parentheses delimit words. Keywords are matched
/// case-insensitively. Tokenizing never fails; grammar errors are the
/// parser's business.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut word_start: Option<usize> = None;

    for (i, c) in input.char_indices() {
        if c.is_whitespace() || c == '(' || c == ')' {
            if let Some(start) = word_start.take() {
                tokens.push(word_token(&input[start..i], Span::new(start, i)));
            }
            match c {
                '(' => tokens.push(Token::new(TokenKind::OpenParen, Span::new(i, i + 1))),
                ')' => tokens.push(Token::new(TokenKind::CloseParen, Span::new(i, i + 1))),
                _ => {},
            }
        } else if word_start.is_none() {
            word_start = Some(i);
        }
    }
    if let Some(start) = word_start {
        tokens.push(word_token(&input[start..], Span::new(start, input.len())));
    }

    tokens
}

fn word_token(word: &str, span: Span) -> Token {
    let kind = if word.eq_ignore_ascii_case("and") {
        TokenKind::And
    } else if word.eq_ignore_ascii_case("or") {
        TokenKind::Or
    } else if word.eq_ignore_ascii_case("with") {
        TokenKind::With
    } else {
        match word.strip_suffix('+') {
            Some(text) if !text.is_empty() => TokenKind::Word {
                text: text.to_string(),
                plus: true,
            },
            _ => TokenKind::Word {
                text: word.to_string(),
                plus: false,
            },
        }
    };
    Token::new(kind, span)
}
