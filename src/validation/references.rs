//! Stylesheet resource references and their reconciliation against
//! produced assets.

use std::collections::BTreeSet;
use std::path::Path;

use regex::Regex;

use crate::error::{IconError, Result};

/// Default reference pattern: any path-like token ending in `.png`.
pub const DEFAULT_PATTERN: &str = r"\/.*\.png";

/// How many references a single stylesheet line may contribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatchMode {
    /// Only the first match on each line.
    #[default]
    FirstPerLine,
    /// Every non-overlapping match on each line.
    All,
}

/// Pulls raster resource paths out of stylesheet source.
#[derive(Debug, Clone)]
pub struct ReferenceExtractor {
    regex: Regex,
    mode: MatchMode,
}

impl ReferenceExtractor {
    /// Compile an extractor. The pattern is wrapped in a capture group.
    pub fn new(pattern: &str, mode: MatchMode) -> Result<Self> {
        let regex = Regex::new(&format!("({})", pattern)).map_err(|e| IconError::Parse {
            message: format!("Invalid reference pattern: {}", e),
            help: None,
        })?;

        Ok(Self { regex, mode })
    }

    /// Collect the unique references in `source`.
    pub fn extract(&self, source: &str) -> BTreeSet<String> {
        let mut refs = BTreeSet::new();

        for line in source.lines() {
            match self.mode {
                MatchMode::FirstPerLine => {
                    if let Some(m) = self.regex.captures(line).and_then(|c| c.get(1)) {
                        refs.insert(m.as_str().to_string());
                    }
                }
                MatchMode::All => {
                    for caps in self.regex.captures_iter(line) {
                        if let Some(m) = caps.get(1) {
                            refs.insert(m.as_str().to_string());
                        }
                    }
                }
            }
        }

        refs
    }

    /// Read a stylesheet and extract its references.
    pub fn extract_file(&self, path: &Path) -> Result<BTreeSet<String>> {
        let source = std::fs::read_to_string(path).map_err(|e| IconError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read stylesheet: {}", e),
        })?;

        Ok(self.extract(&source))
    }
}

/// The path a stylesheet uses to refer to a produced asset.
pub fn resource_path(resource_dir: &str, filename: &str) -> String {
    format!("/{}/{}", resource_dir, filename)
}

/// References that no produced file satisfies, sorted.
///
/// `references` is left untouched; matching happens on an owned copy.
pub fn reconcile<'a>(
    references: &BTreeSet<String>,
    produced: impl IntoIterator<Item = &'a str>,
    resource_dir: &str,
) -> Vec<String> {
    let mut remaining = references.clone();

    for filename in produced {
        remaining.remove(&resource_path(resource_dir, filename));
    }

    remaining.into_iter().collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> ReferenceExtractor {
        ReferenceExtractor::new(DEFAULT_PATTERN, MatchMode::FirstPerLine).unwrap()
    }

    fn set(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_extract_one_per_line() {
        let refs = extractor()
            .extract("background: url(/rc/foo.png);\nother: url(/rc/bar.png);");

        assert_eq!(refs, set(&["/rc/foo.png", "/rc/bar.png"]));
    }

    #[test]
    fn test_extract_deduplicates() {
        let source = "a { image: url(/rc/x.png); }\nb { image: url(/rc/x.png); }\nc { color: red; }";
        let refs = extractor().extract(source);

        assert_eq!(refs, set(&["/rc/x.png"]));
    }

    #[test]
    fn test_extract_first_match_only() {
        let source = "a: url(/rc/a.png); b: url(/rc/b.png);";
        let first = ReferenceExtractor::new(r"\/[\w/]+\.png", MatchMode::FirstPerLine).unwrap();
        let all = ReferenceExtractor::new(r"\/[\w/]+\.png", MatchMode::All).unwrap();

        assert_eq!(first.extract(source), set(&["/rc/a.png"]));
        assert_eq!(all.extract(source), set(&["/rc/a.png", "/rc/b.png"]));
    }

    #[test]
    fn test_invalid_pattern() {
        assert!(matches!(
            ReferenceExtractor::new("(", MatchMode::All),
            Err(IconError::Parse { .. })
        ));
    }

    #[test]
    fn test_reconcile_unmatched() {
        let refs = set(&["/rc/icon_hover.png"]);
        let unmatched = reconcile(&refs, ["icon.png"], "rc");

        assert_eq!(unmatched, vec!["/rc/icon_hover.png"]);
    }

    #[test]
    fn test_reconcile_matched_is_excluded() {
        let refs = set(&["/rc/icon.png", "/rc/icon_hover.png"]);
        let unmatched = reconcile(&refs, ["icon.png", "icon_focus.png"], "rc");

        assert_eq!(unmatched, vec!["/rc/icon_hover.png"]);
        // Original set is untouched
        assert_eq!(refs.len(), 2);
    }

    #[test]
    fn test_reconcile_uses_resource_dir() {
        let refs = set(&["/rc/icon.png"]);
        assert_eq!(reconcile(&refs, ["icon.png"], "icons"), vec!["/rc/icon.png"]);
    }
}
