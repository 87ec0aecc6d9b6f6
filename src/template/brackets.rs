//! Bracket checks run on the path before expressions are extracted.

use super::lexer::{lex, Token};

/// True when the number of `{` differs from the number of `}`.
pub fn has_mismatched_curly_brackets(path: &str) -> bool {
    let (open, close) = lex(path).fold((0usize, 0usize), |(open, close), (tok, _)| match tok {
        Token::BraceOpen => (open + 1, close),
        Token::BraceClose => (open, close + 1),
        _ => (open, close),
    });
    open != close
}

/// True when the same kind of brace appears twice in a row.
///
/// Only brace characters are tracked, so `{a{b}c}` counts as nested while
/// `{a}{b}` does not. There is no depth tracking beyond that.
pub fn has_nested_curly_brackets(path: &str) -> bool {
    let mut last_brace = None;
    for (tok, _) in lex(path).filter(|(tok, _)| tok.is_brace()) {
        if last_brace == Some(tok) {
            return true;
        }
        last_brace = Some(tok);
    }
    false
}

/// True when the path contains `[` or `]` anywhere.
pub fn contains_square_brackets(path: &str) -> bool {
    lex(path).any(|(tok, _)| tok.is_square_bracket())
}
