//! Warning records and the report they are collected into

use std::fmt;

use ariadne::{Color, Label, ReportKind, Source};
use serde::Deserialize;

/// Byte range in source text
pub type Span = std::ops::Range<usize>;

/// Warning category. URI template checks only ever produce one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCategory {
    Uri,
}

impl WarningCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningCategory::Uri => "URIWarning",
        }
    }
}

impl fmt::Display for WarningCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Rule a warning reports. The identifiers returned by [`as_str`] are stable
/// and are also the names accepted in lint configuration files.
///
/// [`as_str`]: WarningSubCode::as_str
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum WarningSubCode {
    #[serde(rename = "NoUriTemplateWarning")]
    NoUriTemplate,
    #[serde(rename = "MismatchedCurlyBracketsWarning")]
    MismatchedCurlyBrackets,
    #[serde(rename = "NestedCurlyBracketsWarning")]
    NestedCurlyBrackets,
    #[serde(rename = "SquareBracketWarning")]
    SquareBracket,
    #[serde(rename = "ContainsSpacesWarning")]
    ContainsSpaces,
    #[serde(rename = "ContainsHyphensWarning")]
    ContainsHyphens,
    #[serde(rename = "ContainsAssignmentWarning")]
    ContainsAssignment,
    #[serde(rename = "InvalidCharactersWarning")]
    InvalidCharacters,
    #[serde(rename = "UnsupportedExpressionWarning")]
    UnsupportedExpression,
}

impl WarningSubCode {
    pub fn as_str(self) -> &'static str {
        match self {
            WarningSubCode::NoUriTemplate => "NoUriTemplateWarning",
            WarningSubCode::MismatchedCurlyBrackets => "MismatchedCurlyBracketsWarning",
            WarningSubCode::NestedCurlyBrackets => "NestedCurlyBracketsWarning",
            WarningSubCode::SquareBracket => "SquareBracketWarning",
            WarningSubCode::ContainsSpaces => "ContainsSpacesWarning",
            WarningSubCode::ContainsHyphens => "ContainsHyphensWarning",
            WarningSubCode::ContainsAssignment => "ContainsAssignmentWarning",
            WarningSubCode::InvalidCharacters => "InvalidCharactersWarning",
            WarningSubCode::UnsupportedExpression => "UnsupportedExpressionWarning",
        }
    }
}

impl fmt::Display for WarningSubCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A non-fatal problem found in a URI template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub message: String,
    pub category: WarningCategory,
    pub subcode: WarningSubCode,
    /// Where the template came from in the enclosing document. Empty when
    /// the warning is not tied to a location.
    pub source_map: Vec<Span>,
}

impl Warning {
    pub fn new(message: impl Into<String>, subcode: WarningSubCode, source_map: &[Span]) -> Self {
        Self {
            message: message.into(),
            category: WarningCategory::Uri,
            subcode,
            source_map: source_map.to_vec(),
        }
    }

    /// Create a warning with no source location
    pub fn unlocated(message: impl Into<String>, subcode: WarningSubCode) -> Self {
        Self::new(message, subcode, &[])
    }

    /// First source span, if the warning has one
    pub fn span(&self) -> Option<&Span> {
        self.source_map.first()
    }

    /// Format the warning with source context using ariadne
    pub fn format(&self, source: &str, filename: &str) -> String {
        let Some(span) = self.span() else {
            return format!("Warning: {}\n", self);
        };

        let mut report = ariadne::Report::build(ReportKind::Warning, filename, span.start)
            .with_code(self.subcode)
            .with_message(&self.message);
        for (i, span) in self.source_map.iter().enumerate() {
            let label = Label::new((filename, span.clone())).with_color(Color::Yellow);
            report = report.with_label(if i == 0 {
                label.with_message(self.category)
            } else {
                label
            });
        }

        let mut buf = Vec::new();
        if report
            .finish()
            .write((filename, Source::from(source)), &mut buf)
            .is_err()
        {
            return format!("Warning: {}\n", self);
        }
        String::from_utf8_lossy(&buf).into_owned()
    }
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.subcode, self.message)
    }
}

/// Ordered, append-only collection of warnings owned by the caller
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Report {
    pub warnings: Vec<Warning>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, warning: Warning) {
        self.warnings.push(warning);
    }

    pub fn is_empty(&self) -> bool {
        self.warnings.is_empty()
    }

    pub fn len(&self) -> usize {
        self.warnings.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Warning> {
        self.warnings.iter()
    }

    /// Subcodes of all warnings, in order
    pub fn subcodes(&self) -> Vec<WarningSubCode> {
        self.warnings.iter().map(|w| w.subcode).collect()
    }
}

impl<'a> IntoIterator for &'a Report {
    type Item = &'a Warning;
    type IntoIter = std::slice::Iter<'a, Warning>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
