//! URI Template Lint - structural validation of RFC 6570 URI templates
//!
//! This library checks the URI templates found in API description documents.
//! It splits a template into scheme, host and path, checks the path's
//! brackets, and classifies every `{...}` expression by its operator. Nothing
//! is ever expanded; all findings are reported as warnings.
//!
//! # Example
//!
//! ```rust
//! use uri_template_lint::{check, ExpressionKind};
//!
//! let (parsed, report) = check("http://api.com/users/{id}{?page}");
//! assert!(report.is_empty());
//! assert_eq!(parsed.expressions[1].kind, ExpressionKind::QueryString);
//! ```

pub mod config;
pub mod report;
pub mod template;

pub use config::{ConfigError, LintConfig};
pub use report::{Report, Span, Warning, WarningCategory, WarningSubCode};
pub use template::{
    parse, parse_with_matcher, ClassifiedExpression, ExpressionKind, ParsedUriTemplate,
    RegexUriMatcher, UriMatcher, UriParts,
};

/// Parse a single URI template into a fresh report
///
/// Warnings are not tied to a source location.
pub fn check(uri: &str) -> (ParsedUriTemplate, Report) {
    let mut report = Report::new();
    let parsed = parse(uri, &[], &mut report);
    (parsed, report)
}

/// Check a document holding one URI template per line
///
/// Surrounding whitespace is ignored and blank lines are skipped. Each
/// warning is located at the byte range of the template it came from.
///
/// # Example
///
/// ```rust
/// use uri_template_lint::check_document;
///
/// let (parsed, report) = check_document("/users/{id}\n\n/items/{item id}\n");
/// assert_eq!(parsed.len(), 2);
/// assert_eq!(report.warnings[0].source_map, vec![13..29]);
/// ```
pub fn check_document(source: &str) -> (Vec<ParsedUriTemplate>, Report) {
    let mut report = Report::new();
    let mut parsed = Vec::new();

    let mut offset = 0;
    for line in source.split_inclusive('\n') {
        let start = offset;
        offset += line.len();

        let trimmed_start = line.trim_start();
        let template = trimmed_start.trim_end();
        if template.is_empty() {
            continue;
        }
        let begin = start + (line.len() - trimmed_start.len());
        let span = begin..begin + template.len();
        parsed.push(parse(template, &[span], &mut report));
    }

    (parsed, report)
}
