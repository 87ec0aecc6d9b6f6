//! URI template parsing and expression classification

mod brackets;
pub mod expression;
pub mod lexer;
mod parser;

pub use brackets::{contains_square_brackets, has_mismatched_curly_brackets, has_nested_curly_brackets};
pub use expression::{expressions, ClassifiedExpression, ExpressionKind, Expressions};
pub use parser::{parse, parse_with_matcher, ParsedUriTemplate, RegexUriMatcher, UriMatcher, UriParts};
