//! Diagnostics collected while producing an icon set.

use std::fmt;

/// Severity level for a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Warning,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Warning => write!(f, "warning"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// Codes attached to pipeline diagnostics.
pub mod codes {
    pub const UNMATCHED_REFERENCE: &str = "iconset::reconcile::unmatched";
    pub const NO_STYLESHEET: &str = "iconset::reconcile::stylesheet";
    pub const UNTINTED: &str = "iconset::render::untinted";
    pub const ASSET_FAILED: &str = "iconset::render::failed";
}

/// A single diagnostic about one asset, template or reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    /// Machine-readable code, see [`codes`].
    pub code: &'static str,
    /// What the diagnostic is about: a filename or a stylesheet reference.
    pub subject: String,
    pub message: String,
    pub help: Option<String>,
}

impl Diagnostic {
    pub fn error(code: &'static str, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Error,
            code,
            subject: subject.into(),
            message: message.into(),
            help: None,
        }
    }

    pub fn warning(code: &'static str, subject: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: Severity::Warning,
            code,
            subject: subject.into(),
            message: message.into(),
            help: None,
        }
    }

    /// Add help text to this diagnostic.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }
}

/// Ordered collection of diagnostics.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    diagnostics: Vec<Diagnostic>,
}

impl ValidationResult {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    pub fn has_errors(&self) -> bool {
        self.error_count() > 0
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Diagnostics carrying `code`.
    pub fn with_code<'a>(&'a self, code: &'a str) -> impl Iterator<Item = &'a Diagnostic> + 'a {
        self.diagnostics.iter().filter(move |d| d.code == code)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Diagnostic> {
        self.diagnostics.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ValidationResult::new();
        assert!(result.is_ok());
        assert!(!result.has_errors());
        assert_eq!(result.warning_count(), 0);
    }

    #[test]
    fn test_counts_by_severity() {
        let mut result = ValidationResult::new();
        result.push(Diagnostic::error(codes::ASSET_FAILED, "icon.png", "invalid SVG"));
        result.push(Diagnostic::warning(
            codes::UNMATCHED_REFERENCE,
            "/rc/icon_hover.png",
            "referenced but not produced",
        ));
        result.push(Diagnostic::warning(codes::UNTINTED, "plain.png", "no placeholder"));

        assert!(result.has_errors());
        assert_eq!(result.error_count(), 1);
        assert_eq!(result.warning_count(), 2);
        assert_eq!(result.with_code(codes::UNTINTED).count(), 1);
    }

    #[test]
    fn test_diagnostic_with_help() {
        let d = Diagnostic::warning(codes::UNMATCHED_REFERENCE, "/rc/x.png", "missing")
            .with_help("Add a template that produces this file or fix the stylesheet");

        assert_eq!(d.severity, Severity::Warning);
        assert_eq!(
            d.help.as_deref(),
            Some("Add a template that produces this file or fix the stylesheet")
        );
    }
}
