//! Listing loader
//!
//! Listings are hand-edited YAML, and hand-edited YAML tends to be indented with tabs,
//! which YAML forbids. Every tab is expanded to a fixed run of spaces before parsing.
//!
//! The parsed tree is a plain [`serde_yaml::Value`]. Its `Mapping` keeps keys in
//! insertion order, so records and attributes come out in the order they were written.

use crate::error::RenderError;
use serde_yaml::Value;
use std::borrow::Cow;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Default number of spaces a tab expands to
pub const DEFAULT_TAB_WIDTH: usize = 4;

/// Read and parse a listing file.
pub fn load_yaml(path: &Path, tab_width: usize) -> Result<Value, RenderError> {
    let source = fs::read_to_string(path).map_err(|e| RenderError::io(path, e))?;
    debug!(path = %path.display(), bytes = source.len(), "loaded listing");
    parse_yaml(&source, tab_width).map_err(|e| RenderError::parse(path, e))
}

/// Parse listing text, expanding tabs first.
///
/// Empty (or whitespace-only) input yields `Value::Null`.
pub fn parse_yaml(source: &str, tab_width: usize) -> Result<Value, serde_yaml::Error> {
    let normalized = normalize_tabs(source, tab_width);
    if normalized.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_yaml::from_str(&normalized)
}

/// Replace every tab with `tab_width` spaces.
pub fn normalize_tabs(source: &str, tab_width: usize) -> Cow<'_, str> {
    if source.contains('\t') {
        Cow::Owned(source.replace('\t', &" ".repeat(tab_width)))
    } else {
        Cow::Borrowed(source)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tabs_become_spaces() {
        assert_eq!(normalize_tabs("a:\n\tb: 1\n", 4), "a:\n    b: 1\n");
        assert_eq!(normalize_tabs("\t\t", 2), "    ");
    }

    #[test]
    fn text_without_tabs_is_borrowed() {
        assert!(matches!(normalize_tabs("a: 1\n", 4), Cow::Borrowed(_)));
    }

    #[test]
    fn tab_indented_listing_parses() {
        let src = "- ACM:\n\t名称: ACM计算概览\n\t文章:\n\t\t- 神经网络崛起\n";
        let value = parse_yaml(src, DEFAULT_TAB_WIDTH).unwrap();
        let record = &value[0]["ACM"];
        assert_eq!(record["名称"].as_str(), Some("ACM计算概览"));
        assert_eq!(record["文章"][0].as_str(), Some("神经网络崛起"));
    }

    #[test]
    fn mapping_keys_keep_source_order() {
        let src = "- P:\n    z: 1\n    a: 2\n    m: 3\n";
        let value = parse_yaml(src, DEFAULT_TAB_WIDTH).unwrap();
        let keys: Vec<_> = value[0]["P"]
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.as_str().unwrap().to_string())
            .collect();
        assert_eq!(keys, vec!["z", "a", "m"]);
    }

    #[test]
    fn empty_source_is_null() {
        assert_eq!(parse_yaml("", 4).unwrap(), Value::Null);
        assert_eq!(parse_yaml("  \n\t\n", 4).unwrap(), Value::Null);
    }

    #[test]
    fn malformed_source_is_an_error() {
        assert!(parse_yaml("- a: [unclosed\n", 4).is_err());
    }

    #[test]
    fn load_reports_missing_file_as_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_yaml(&dir.path().join("absent.yaml"), 4).unwrap_err();
        assert!(matches!(err, RenderError::Io { .. }));
    }

    #[test]
    fn load_reports_bad_yaml_as_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.yaml");
        fs::write(&path, "- a: [unclosed\n").unwrap();
        let err = load_yaml(&path, 4).unwrap_err();
        assert!(matches!(err, RenderError::Parse { .. }));
        assert!(err.to_string().contains("bad.yaml"));
    }
}
