//! Shared helpers for the integration tests.

use ctrlcv_render::{render_page, RenderOptions};
use once_cell::sync::Lazy;
use regex::Regex;
use std::path::PathBuf;

static ATTR: Lazy<Regex> = Lazy::new(|| Regex::new(r#"([a-z-]+)="([^"]*)""#).unwrap());

pub fn fixture(name: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name);
    std::fs::read_to_string(path).unwrap()
}

pub fn fixture_page() -> String {
    render_page(
        &fixture("journals.yaml"),
        &fixture("papers.yaml"),
        &RenderOptions::default(),
    )
    .unwrap()
}

/// Inner markup of the element with the given id (`left-panel` / `right-panel`).
pub fn panel<'a>(html: &'a str, id: &str) -> &'a str {
    let open = format!(r#"id="{id}">"#);
    let start = html.find(&open).unwrap() + open.len();
    let end = start + html[start..].find("\n        </div>").unwrap();
    &html[start..end]
}

/// Values of every `name="..."` attribute, unescaped, in document order.
pub fn attr_values(markup: &str, name: &str) -> Vec<String> {
    ATTR.captures_iter(markup)
        .filter(|c| &c[1] == name)
        .map(|c| unescape(&c[2]))
        .collect()
}

pub fn unescape(s: &str) -> String {
    s.replace("&quot;", "\"")
        .replace("&lt;", "<")
        .replace("&gt;", ">")
        .replace("&amp;", "&")
}
