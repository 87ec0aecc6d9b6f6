//! Expression extraction and classification
//!
//! An expression is the text between one `{` and the next `}` of a URI
//! template path. Each expression is classified into one of the RFC 6570
//! operator forms by testing the forms in a fixed priority order; the first
//! form whose predicate matches wins.

use std::fmt;

/// Operator characters defined by RFC 6570 level 2 and 3 templates
const OPERATORS: &[char] = &['+', '#', '.', '/', ';', '?', '&'];

/// Operator characters RFC 6570 reserves for future extensions
const RESERVED_OPERATORS: &[char] = &['=', ',', '!', '@', '|'];

/// Characters that structure a variable list rather than name a variable
const SEPARATORS: &[char] = &[',', ':', '*'];

/// Warning text attached to expressions with no supported operator
pub const UNSUPPORTED_EXPRESSION_TEXT: &str =
    "the URI template contains an unsupported expression operator";

/// Iterate over the expressions of a path in left-to-right order.
///
/// The path is expected to have passed the mismatched and nested bracket
/// checks; on other input a captured expression may swallow brackets.
pub fn expressions(path: &str) -> Expressions<'_> {
    Expressions { path, cursor: 0 }
}

/// Lazy iterator over the raw expressions of a path
#[derive(Debug, Clone)]
pub struct Expressions<'a> {
    path: &'a str,
    cursor: usize,
}

impl<'a> Iterator for Expressions<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let open = self.cursor + self.path.get(self.cursor..)?.find('{')?;
        let close = open + self.path[open..].find('}')?;
        self.cursor = open + 1;
        Some(&self.path[open + 1..close])
    }
}

/// Operator form of an expression
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExpressionKind {
    /// `{var}` simple string expansion
    Variable,
    /// `{?var}`
    QueryString,
    /// `{#var}`
    Fragment,
    /// `{+var}`
    ReservedExpansion,
    /// `{.var}`
    LabelExpansion,
    /// `{/var}`
    PathSegmentExpansion,
    /// `{;var}`
    PathStyleParameterExpansion,
    /// `{&var}`
    FormStyleQueryContinuation,
    /// Anything no other form accepts
    Undefined,
}

impl ExpressionKind {
    /// Forms in the order they are tested. `Undefined` is the fallback and
    /// is not listed.
    pub const PRIORITY: [ExpressionKind; 8] = [
        ExpressionKind::Variable,
        ExpressionKind::QueryString,
        ExpressionKind::Fragment,
        ExpressionKind::ReservedExpansion,
        ExpressionKind::LabelExpansion,
        ExpressionKind::PathSegmentExpansion,
        ExpressionKind::PathStyleParameterExpansion,
        ExpressionKind::FormStyleQueryContinuation,
    ];

    /// The leading operator character selecting this form, if any
    pub fn operator(self) -> Option<char> {
        match self {
            ExpressionKind::QueryString => Some('?'),
            ExpressionKind::Fragment => Some('#'),
            ExpressionKind::ReservedExpansion => Some('+'),
            ExpressionKind::LabelExpansion => Some('.'),
            ExpressionKind::PathSegmentExpansion => Some('/'),
            ExpressionKind::PathStyleParameterExpansion => Some(';'),
            ExpressionKind::FormStyleQueryContinuation => Some('&'),
            ExpressionKind::Variable | ExpressionKind::Undefined => None,
        }
    }

    /// Whether an expression text has this form
    pub fn matches(self, expression: &str) -> bool {
        let first = expression.chars().next();
        match (self, self.operator()) {
            (ExpressionKind::Variable, _) => first.map_or(true, |c| {
                !OPERATORS.contains(&c) && !RESERVED_OPERATORS.contains(&c)
            }),
            (ExpressionKind::Undefined, _) => true,
            (_, operator) => first.is_some() && first == operator,
        }
    }

    /// Determine the form of an expression
    pub fn classify(expression: &str) -> Self {
        Self::PRIORITY
            .into_iter()
            .find(|kind| kind.matches(expression))
            .unwrap_or(ExpressionKind::Undefined)
    }

    pub fn name(self) -> &'static str {
        match self {
            ExpressionKind::Variable => "variable",
            ExpressionKind::QueryString => "query string",
            ExpressionKind::Fragment => "fragment",
            ExpressionKind::ReservedExpansion => "reserved expansion",
            ExpressionKind::LabelExpansion => "label expansion",
            ExpressionKind::PathSegmentExpansion => "path segment expansion",
            ExpressionKind::PathStyleParameterExpansion => "path style parameter expansion",
            ExpressionKind::FormStyleQueryContinuation => "form style query continuation",
            ExpressionKind::Undefined => "undefined",
        }
    }
}

impl fmt::Display for ExpressionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// An expression together with its operator form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassifiedExpression {
    pub kind: ExpressionKind,
    /// Expression text without the surrounding braces
    pub inner_expression: String,
}

impl ClassifiedExpression {
    pub fn classify(expression: &str) -> Self {
        Self {
            kind: ExpressionKind::classify(expression),
            inner_expression: expression.to_string(),
        }
    }

    pub fn is_supported_expression_type(&self) -> bool {
        self.kind != ExpressionKind::Undefined
    }

    /// Warning text for unsupported forms
    pub fn unsupported_warning_text(&self) -> Option<&'static str> {
        (!self.is_supported_expression_type()).then_some(UNSUPPORTED_EXPRESSION_TEXT)
    }

    /// The variable list, i.e. the expression minus its operator prefix
    pub fn variable_list(&self) -> &str {
        match self.kind.operator() {
            Some(op) => self
                .inner_expression
                .strip_prefix(op)
                .unwrap_or(&self.inner_expression),
            None => &self.inner_expression,
        }
    }

    pub fn contains_spaces(&self) -> bool {
        self.variable_list().contains(' ')
    }

    pub fn contains_hyphens(&self) -> bool {
        self.variable_list().contains('-')
    }

    pub fn contains_assignment(&self) -> bool {
        self.variable_list().contains('=')
    }

    /// True if a variable name holds anything besides ASCII letters, digits,
    /// `_` and percent-encoded triplets. List separators and modifiers
    /// (`,` `:` `*`) are skipped.
    pub fn is_invalid_expression_name(&self) -> bool {
        let mut chars = self.variable_list().chars();
        while let Some(c) = chars.next() {
            match c {
                c if SEPARATORS.contains(&c) => {}
                c if c.is_ascii_alphanumeric() || c == '_' => {}
                '%' => {
                    let encoded = chars
                        .next()
                        .zip(chars.next())
                        .is_some_and(|(hi, lo)| hi.is_ascii_hexdigit() && lo.is_ascii_hexdigit());
                    if !encoded {
                        return true;
                    }
                }
                _ => return true,
            }
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(expression: &str) -> ExpressionKind {
        ExpressionKind::classify(expression)
    }

    #[test]
    fn test_extract_single() {
        let found: Vec<_> = expressions("/users/{id}").collect();
        assert_eq!(found, vec!["id"]);
    }

    #[test]
    fn test_extract_in_order() {
        let found: Vec<_> = expressions("/{id}{name}/x/{?q,page}").collect();
        assert_eq!(found, vec!["id", "name", "?q,page"]);
    }

    #[test]
    fn test_extract_none() {
        assert_eq!(expressions("/plain/path").count(), 0);
        assert_eq!(expressions("").count(), 0);
    }

    #[test]
    fn test_extract_empty_expression() {
        let found: Vec<_> = expressions("/a{}b").collect();
        assert_eq!(found, vec![""]);
    }

    #[test]
    fn test_extract_stops_without_close() {
        let found: Vec<_> = expressions("/{a}/{b").collect();
        assert_eq!(found, vec!["a"]);
    }

    #[test]
    fn test_extract_multibyte_literals() {
        let found: Vec<_> = expressions("/café/{id}/ü{x}").collect();
        assert_eq!(found, vec!["id", "x"]);
    }

    #[test]
    fn test_classify_operators() {
        assert_eq!(kind("id"), ExpressionKind::Variable);
        assert_eq!(kind("?q"), ExpressionKind::QueryString);
        assert_eq!(kind("#section"), ExpressionKind::Fragment);
        assert_eq!(kind("+path"), ExpressionKind::ReservedExpansion);
        assert_eq!(kind(".ext"), ExpressionKind::LabelExpansion);
        assert_eq!(kind("/segments"), ExpressionKind::PathSegmentExpansion);
        assert_eq!(kind(";params"), ExpressionKind::PathStyleParameterExpansion);
        assert_eq!(kind("&more"), ExpressionKind::FormStyleQueryContinuation);
    }

    #[test]
    fn test_classify_reserved_operators_undefined() {
        for expr in ["=x", ",x", "!x", "@x", "|x"] {
            assert_eq!(kind(expr), ExpressionKind::Undefined, "{expr}");
        }
    }

    #[test]
    fn test_classify_empty_is_variable() {
        assert_eq!(kind(""), ExpressionKind::Variable);
    }

    #[test]
    fn test_classify_only_first_char_counts() {
        assert_eq!(kind("a?b"), ExpressionKind::Variable);
        assert_eq!(kind("?#x"), ExpressionKind::QueryString);
    }

    #[test]
    fn test_classification_is_total() {
        for expr in ["", " ", "-", "a", "?", "#", "+", ".", "/", ";", "&", "=", "é", "%20"] {
            let matching: Vec<_> = ExpressionKind::PRIORITY
                .into_iter()
                .filter(|k| k.matches(expr))
                .collect();
            assert!(matching.len() <= 1, "{expr:?} matched {matching:?}");
            let _ = kind(expr);
        }
    }

    #[test]
    fn test_supported() {
        assert!(ClassifiedExpression::classify("id").is_supported_expression_type());
        assert!(ClassifiedExpression::classify("&id").is_supported_expression_type());
        let undefined = ClassifiedExpression::classify("|id");
        assert!(!undefined.is_supported_expression_type());
        assert_eq!(
            undefined.unsupported_warning_text(),
            Some(UNSUPPORTED_EXPRESSION_TEXT)
        );
        assert_eq!(ClassifiedExpression::classify("id").unsupported_warning_text(), None);
    }

    #[test]
    fn test_illegal_characters() {
        let expr = ClassifiedExpression::classify("id name");
        assert!(expr.contains_spaces());
        assert!(!expr.contains_hyphens());
        assert!(!expr.contains_assignment());

        let expr = ClassifiedExpression::classify("?user-id=1");
        assert!(!expr.contains_spaces());
        assert!(expr.contains_hyphens());
        assert!(expr.contains_assignment());
    }

    #[test]
    fn test_variable_list_strips_operator() {
        assert_eq!(ClassifiedExpression::classify("?q,page").variable_list(), "q,page");
        assert_eq!(ClassifiedExpression::classify("id").variable_list(), "id");
        assert_eq!(ClassifiedExpression::classify("/").variable_list(), "");
    }

    #[test]
    fn test_valid_names() {
        for expr in ["id", "user_id", "?q,page", "path:3", "/list*", "%20name", "", "#a1,b2:10"] {
            assert!(
                !ClassifiedExpression::classify(expr).is_invalid_expression_name(),
                "{expr:?} should be valid"
            );
        }
    }

    #[test]
    fn test_invalid_names() {
        for expr in ["user.id", "na$me", "%2", "%zz", "?q,pa!ge", "é", "a%"] {
            assert!(
                ClassifiedExpression::classify(expr).is_invalid_expression_name(),
                "{expr:?} should be invalid"
            );
        }
    }
}
