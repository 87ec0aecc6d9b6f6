//! Bracket lexer for URI template paths using logos

use logos::Logos;

use crate::report::Span;

/// Path tokens relevant to bracket checks.
///
/// Everything that is not a bracket is folded into [`Token::Literal`].
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    #[token("{")]
    BraceOpen,
    #[token("}")]
    BraceClose,
    #[token("[")]
    BracketOpen,
    #[token("]")]
    BracketClose,

    #[regex(r"[^{}\[\]]+")]
    Literal,
}

impl Token {
    /// True for `{` and `}`
    pub fn is_brace(self) -> bool {
        matches!(self, Token::BraceOpen | Token::BraceClose)
    }

    /// True for `[` and `]`
    pub fn is_square_bracket(self) -> bool {
        matches!(self, Token::BracketOpen | Token::BracketClose)
    }
}

/// Lex a path into tokens with their byte spans
pub fn lex(input: &str) -> impl Iterator<Item = (Token, Span)> + '_ {
    Token::lexer(input)
        .spanned()
        .filter_map(|(tok, span)| tok.ok().map(|t| (t, span)))
}
