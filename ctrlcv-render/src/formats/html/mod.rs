//! HTML page output
//!
//! The page is a two-panel layout: journals on the left (`#left-panel`), papers on the
//! right (`#right-panel`). Each panel is a flat run of line elements produced by
//! [`render_journals`] and [`render_papers`]; [`assemble_page`] drops both runs into a
//! fixed template with the embedded stylesheet (`css/page.css`) and script
//! (`js/page.js`).
//!
//! # Controls
//!
//! Every interactive element carries a `data-action` attribute that the script
//! dispatches on:
//!
//! | `data-action`   | Element                    | Effect                                             |
//! |-----------------|----------------------------|----------------------------------------------------|
//! | `copy-line`     | `-` button before a label  | copies the label/link text next to it              |
//! | `copy-value`    | `:` button after a label   | copies the trimmed text following the button       |
//! | `copy-abstract` | `:` button on abstract     | copies the trimmed `.multiline` block below        |
//! | `copy-joined`   | separator buttons on lists | copies `data-items` joined by `data-sep`           |
//! | `goto`          | cross-reference links      | scrolls `data-panel` to `data-target`, highlights  |
//!
//! After a copy the button shows the copied glyph and reverts after the configured
//! delay. Clicking again restarts the delay; the pending timer lives on the button.
//!
//! # Determinism
//!
//! Nothing time- or environment-dependent is written, so unchanged inputs produce a
//! byte-identical page.

mod journal;
mod markup;
mod paper;

pub use journal::render_journals;
pub use paper::render_papers;

/// Id of the journal panel.
pub const JOURNAL_PANEL: &str = "left-panel";
/// Id of the paper panel.
pub const PAPER_PANEL: &str = "right-panel";

/// Join delimiters offered next to every list: full-width enumeration comma, comma and
/// semicolon, then their ASCII counterparts.
pub const DEFAULT_SEPARATORS: [&str; 5] = ["、", "，", "；", ", ", "; "];

const PAGE_CSS: &str = include_str!("../../../css/page.css");
const PAGE_JS: &str = include_str!("../../../js/page.js");

/// Indentation of panel lines inside the template.
const LINE_INDENT: &str = "\n            ";

/// Options for page assembly
#[derive(Debug, Clone, PartialEq)]
pub struct PageOptions {
    /// Document `<title>`
    pub title: String,
    /// Join delimiters for list attributes
    pub separators: Vec<String>,
    /// Glyph a button shows right after a successful copy
    pub copied_glyph: String,
    /// How long the copied glyph stays, in milliseconds
    pub copy_revert_ms: u64,
    /// Duration of the cross-reference highlight fade, in milliseconds
    pub highlight_fade_ms: u64,
    /// Distance kept above a scrolled-to block, in pixels
    pub scroll_offset_px: u32,
}

impl Default for PageOptions {
    fn default() -> Self {
        Self {
            title: "ExCiting".to_string(),
            separators: DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect(),
            copied_glyph: "#".to_string(),
            copy_revert_ms: 1000,
            highlight_fade_ms: 2000,
            scroll_offset_px: 50,
        }
    }
}

/// The stylesheet embedded in every page.
pub fn get_default_css() -> &'static str {
    PAGE_CSS
}

/// Wrap both panels' lines in the page template.
pub fn assemble_page<J, P>(journal_lines: J, paper_lines: P, options: &PageOptions) -> String
where
    J: IntoIterator<Item = String>,
    P: IntoIterator<Item = String>,
{
    let left = join_lines(journal_lines);
    let right = join_lines(paper_lines);
    let title = html_escape(&options.title);
    let glyph = html_escape(&options.copied_glyph);
    let revert_ms = options.copy_revert_ms;
    let fade_ms = options.highlight_fade_ms;
    let offset = options.scroll_offset_px;

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="UTF-8">
    <meta name="generator" content="ctrlcv">
    <title>{title}</title>
    <style>
{PAGE_CSS}
    </style>
</head>
<body data-copied-glyph="{glyph}" data-revert-ms="{revert_ms}" data-scroll-offset="{offset}" style="--highlight-fade: {fade_ms}ms">
    <div class="container">
        <div class="left" id="{JOURNAL_PANEL}">
            {left}
        </div>

        <div class="right" id="{PAPER_PANEL}">
            {right}
        </div>
    </div>

    <script>
{PAGE_JS}
    </script>
</body>
</html>
"#
    )
}

fn join_lines<I: IntoIterator<Item = String>>(lines: I) -> String {
    lines.into_iter().collect::<Vec<_>>().join(LINE_INDENT)
}

/// Escape HTML special characters in text
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
