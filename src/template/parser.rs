//! URI template parser
//!
//! Decomposes a URI template, checks its brackets and validates every
//! expression found in its path. Problems are appended to a caller-owned
//! [`Report`]; parsing itself never fails.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::{debug, trace};

use crate::report::{Report, Span, Warning, WarningSubCode};

use super::brackets::{
    contains_square_brackets, has_mismatched_curly_brackets, has_nested_curly_brackets,
};
use super::expression::{expressions, ClassifiedExpression};

/// Scheme, authority separator, host, path
static URI_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(https?|ftp|file)?(://)?([^/]*)?(.*)$").expect("URI regex is valid")
});

/// The parts of a URI a template is checked against
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UriParts {
    pub scheme: String,
    pub host: String,
    pub path: String,
}

/// Splits a URI into scheme, host and path
pub trait UriMatcher {
    /// Returns `None` when the text is not a URI
    fn decompose(&self, uri: &str) -> Option<UriParts>;
}

/// Default matcher backed by a single regular expression
#[derive(Debug, Clone, Copy, Default)]
pub struct RegexUriMatcher;

impl UriMatcher for RegexUriMatcher {
    fn decompose(&self, uri: &str) -> Option<UriParts> {
        let caps = URI_REGEX.captures(uri)?;
        let group = |i: usize| caps.get(i).map_or("", |m| m.as_str()).to_string();
        Some(UriParts {
            scheme: group(1),
            host: group(3),
            path: group(4),
        })
    }
}

/// Result of parsing one URI template
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedUriTemplate {
    pub scheme: String,
    pub host: String,
    pub path: String,
    /// Expressions of the path in order of appearance. Empty when the
    /// template was rejected before extraction.
    pub expressions: Vec<ClassifiedExpression>,
}

/// Parse a URI template with the default matcher
///
/// `source_map` locates the template in its enclosing document and is copied
/// onto every warning tied to the template.
///
/// # Example
///
/// ```rust
/// use uri_template_lint::{parse, Report, WarningSubCode};
///
/// let mut report = Report::new();
/// let parsed = parse("http://api.com/{id name}", &[], &mut report);
///
/// assert_eq!(parsed.host, "api.com");
/// assert_eq!(report.subcodes(), vec![WarningSubCode::ContainsSpaces]);
/// ```
pub fn parse(uri: &str, source_map: &[Span], report: &mut Report) -> ParsedUriTemplate {
    parse_with_matcher(&RegexUriMatcher, uri, source_map, report)
}

/// Parse a URI template using a custom matcher for the scheme/host/path split
pub fn parse_with_matcher<M: UriMatcher + ?Sized>(
    matcher: &M,
    uri: &str,
    source_map: &[Span],
    report: &mut Report,
) -> ParsedUriTemplate {
    let mut result = ParsedUriTemplate::default();

    if uri.is_empty() {
        return result;
    }

    let Some(parts) = matcher.decompose(uri) else {
        debug!(uri, "URI template did not match");
        report.push(Warning::unlocated(
            "failed to parse URI Template",
            WarningSubCode::NoUriTemplate,
        ));
        return result;
    };
    debug!(
        scheme = %parts.scheme,
        host = %parts.host,
        path = %parts.path,
        "decomposed URI template"
    );
    result.scheme = parts.scheme;
    result.host = parts.host;
    result.path = parts.path;

    if has_mismatched_curly_brackets(&result.path) {
        debug!(path = %result.path, "mismatched brackets, skipping expressions");
        report.push(Warning::new(
            "the URI template contains mismatched expression brackets",
            WarningSubCode::MismatchedCurlyBrackets,
            source_map,
        ));
        return result;
    }

    if has_nested_curly_brackets(&result.path) {
        debug!(path = %result.path, "nested brackets, skipping expressions");
        report.push(Warning::new(
            "the URI template contains nested expression brackets",
            WarningSubCode::NestedCurlyBrackets,
            source_map,
        ));
        return result;
    }

    if contains_square_brackets(&result.path) {
        report.push(Warning::new(
            "the URI template contains square brackets",
            WarningSubCode::SquareBracket,
            source_map,
        ));
    }

    for expression in expressions(&result.path) {
        let classified = ClassifiedExpression::classify(expression);
        trace!(expression, kind = %classified.kind, "classified expression");
        check_expression(&classified, source_map, report);
        result.expressions.push(classified);
    }

    result
}

fn check_expression(expression: &ClassifiedExpression, source_map: &[Span], report: &mut Report) {
    if let Some(text) = expression.unsupported_warning_text() {
        report.push(Warning::new(
            text,
            WarningSubCode::UnsupportedExpression,
            source_map,
        ));
        return;
    }

    let illegal = [
        (expression.contains_spaces(), "spaces", WarningSubCode::ContainsSpaces),
        (expression.contains_hyphens(), "hyphens", WarningSubCode::ContainsHyphens),
        (
            expression.contains_assignment(),
            "assignment",
            WarningSubCode::ContainsAssignment,
        ),
    ];

    let mut has_illegal_characters = false;
    for (_, what, subcode) in illegal.into_iter().filter(|(found, _, _)| *found) {
        report.push(Warning::new(
            format!(
                "URI template '{}' contains {}",
                expression.inner_expression, what
            ),
            subcode,
            source_map,
        ));
        has_illegal_characters = true;
    }

    if !has_illegal_characters && expression.is_invalid_expression_name() {
        report.push(Warning::new(
            format!(
                "URI template '{}' contains invalid characters",
                expression.inner_expression
            ),
            WarningSubCode::InvalidCharacters,
            source_map,
        ));
    }
}
