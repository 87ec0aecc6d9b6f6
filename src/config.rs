//! Lint configuration
//!
//! Controls which warnings are shown and whether remaining warnings fail a
//! run. Loaded from TOML:
//!
//! ```toml
//! allow = ["SquareBracketWarning"]
//! deny_warnings = true
//! ```

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::report::{Report, Warning, WarningSubCode};

/// Errors that can occur when loading or parsing a lint configuration
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse config TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LintConfig {
    /// Subcodes hidden from output
    pub allow: Vec<WarningSubCode>,
    /// Fail when any visible warning remains
    pub deny_warnings: bool,
}

impl LintConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load configuration from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Hide warnings with this subcode
    pub fn with_allow(mut self, subcode: WarningSubCode) -> Self {
        if !self.allow.contains(&subcode) {
            self.allow.push(subcode);
        }
        self
    }

    /// Enable or disable failing on warnings
    pub fn with_deny_warnings(mut self, deny: bool) -> Self {
        self.deny_warnings = deny;
        self
    }

    pub fn is_allowed(&self, subcode: WarningSubCode) -> bool {
        self.allow.contains(&subcode)
    }

    /// Warnings of the report that are not allowed
    pub fn visible<'a>(&'a self, report: &'a Report) -> impl Iterator<Item = &'a Warning> + 'a {
        report.iter().filter(|w| !self.is_allowed(w.subcode))
    }

    /// Whether the report should fail a run under this configuration
    pub fn fails(&self, report: &Report) -> bool {
        self.deny_warnings && self.visible(report).next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LintConfig::default();
        assert!(config.allow.is_empty());
        assert!(!config.deny_warnings);
    }

    #[test]
    fn test_parse_toml() {
        let config = LintConfig::from_str(
            r#"
            allow = ["SquareBracketWarning", "InvalidCharactersWarning"]
            deny_warnings = true
            "#,
        )
        .unwrap();
        assert_eq!(
            config.allow,
            vec![WarningSubCode::SquareBracket, WarningSubCode::InvalidCharacters]
        );
        assert!(config.deny_warnings);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(LintConfig::from_str("").unwrap(), LintConfig::default());
    }

    #[test]
    fn test_unknown_subcode_rejected() {
        let err = LintConfig::from_str(r#"allow = ["SquareBrackets"]"#).unwrap_err();
        assert!(matches!(err, ConfigError::ParseError(_)));
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(LintConfig::from_str("warn = true").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = LintConfig::from_file(Path::new("/nonexistent/lint.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::IoError(_)));
        assert!(err.to_string().starts_with("Failed to read config file"));
    }

    #[test]
    fn test_builder_pattern() {
        let config = LintConfig::new()
            .with_allow(WarningSubCode::SquareBracket)
            .with_allow(WarningSubCode::SquareBracket)
            .with_deny_warnings(true);
        assert_eq!(config.allow, vec![WarningSubCode::SquareBracket]);
        assert!(config.deny_warnings);
    }

    #[test]
    fn test_visible_and_fails() {
        let mut report = Report::new();
        report.push(Warning::unlocated("sq", WarningSubCode::SquareBracket));

        let config = LintConfig::new().with_deny_warnings(true);
        assert_eq!(config.visible(&report).count(), 1);
        assert!(config.fails(&report));

        let config = config.with_allow(WarningSubCode::SquareBracket);
        assert_eq!(config.visible(&report).count(), 0);
        assert!(!config.fails(&report));
        // Filtering never touches the report
        assert_eq!(report.len(), 1);
    }
}
