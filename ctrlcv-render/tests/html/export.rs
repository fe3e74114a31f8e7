//! Export tests for the HTML page (listings → HTML)
//!
//! These tests render the fixture listings and check the resulting markup.

use crate::common::{attr_values, fixture, fixture_page, panel};
use ctrlcv_render::{render_page, RenderOptions};
use insta::assert_snapshot;

fn line_containing<'a>(markup: &'a str, needle: &str) -> &'a str {
    markup
        .split("\n            ")
        .find(|line| line.contains(needle))
        .unwrap_or_else(|| panic!("no line contains {needle:?}"))
}

// ============================================================================
// PAGE STRUCTURE
// ============================================================================

#[test]
fn test_page_skeleton() {
    let html = fixture_page();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains(r#"<meta charset="UTF-8">"#));
    assert!(html.contains("<style>"));
    assert!(html.contains("<script>"));
    assert!(html.trim_end().ends_with("</html>"));
}

#[test]
fn test_records_keep_source_order() {
    let html = fixture_page();
    let papers = panel(&html, "right-panel");

    let first = papers.find("Deep Residual Learning").unwrap();
    let second = papers.find("Attention-Based Models").unwrap();
    let third = papers.find("图神经网络研究进展").unwrap();
    assert!(first < second && second < third);
}

#[test]
fn test_rendering_is_idempotent() {
    assert_eq!(fixture_page(), fixture_page());
}

// ============================================================================
// JOURNAL PANEL
// ============================================================================

#[test]
fn test_tab_indented_journals_render() {
    let html = fixture_page();
    let journals = panel(&html, "left-panel");

    assert_snapshot!(
        line_containing(journals, "影响因子"),
        @r#"<div class="line l1">影响因子<button data-action="copy-value">:</button>20.8</div>"#
    );
    assert!(journals.contains(r#"id="journal-计算机学报""#));
}

#[test]
fn test_article_entries_link_to_papers() {
    let html = fixture_page();
    let journals = panel(&html, "left-panel");

    assert_eq!(
        attr_values(journals, "data-target"),
        vec![
            "Deep_Residual_Learning",
            "Attention_Based_Models",
            "图神经网络研究进展",
        ]
    );
}

// ============================================================================
// PAPER PANEL
// ============================================================================

#[test]
fn test_abstract_is_trimmed_with_line_breaks_preserved() {
    let html = fixture_page();

    assert!(html.contains(
        "<div class=\"line l2 multiline\">We present a residual learning framework.\n  Indented continuation stays.\nLast line.</div>"
    ));
}

#[test]
fn test_list_join_buttons_produce_the_five_conventions() {
    let html = fixture_page();
    let keywords = line_containing(panel(&html, "right-panel"), "关键词");

    let separators = attr_values(keywords, "data-sep");
    let items = attr_values(keywords, "data-items");
    assert_eq!(items.len(), 5);

    let joined: Vec<String> = separators
        .iter()
        .zip(&items)
        .map(|(sep, json)| {
            let items: Vec<String> = serde_json::from_str(json).unwrap();
            items.join(sep)
        })
        .collect();

    assert_eq!(
        joined,
        vec!["A、B、C", "A，B，C", "A；B；C", "A, B, C", "A; B; C"]
    );
}

#[test]
fn test_authors_render_keyed_entries() {
    let html = fixture_page();
    let papers = panel(&html, "right-panel");

    assert_snapshot!(
        line_containing(papers, r#"sub-item">Kaiming He"#),
        @r#"<div class="line l2"><button class="list-btn" data-action="copy-line">-</button><span class="sub-item">Kaiming He</span></div>"#
    );
    assert_snapshot!(
        line_containing(papers, "MSRA</div>"),
        @r#"<div class="line l3">单位<button data-action="copy-value">:</button>MSRA</div>"#
    );
    assert!(papers.contains(
        r#"<div class="line l3">值<button data-action="copy-value">:</button>MSRA</div>"#
    ));
}

#[test]
fn test_nested_mapping_is_flattened() {
    let html = fixture_page();
    let papers = panel(&html, "right-panel");

    assert!(papers.contains(r#"<div class="line l1">出版</div>"#));
    assert!(papers.contains(
        r#"<div class="line l1">城市<button data-action="copy-value">:</button>New York</div>"#
    ));
    assert!(papers.contains(
        r#"<div class="line l1">页码<button data-action="copy-value">:</button>1-12</div>"#
    ));
}

#[test]
fn test_empty_list_and_mapping_render_label_lines() {
    let html = fixture_page();
    let papers = panel(&html, "right-panel");

    let tags = line_containing(papers, "标签");
    assert!(tags.contains(r#"data-items="[]""#));
    assert!(papers.contains(r#"<div class="line l1">附录</div>"#));
}

#[test]
fn test_markup_in_titles_is_escaped() {
    let html = render_page(
        "- <script>J</script>:\n    名称: a & b\n",
        "- P:\n    期刊: <script>J</script>\n",
        &RenderOptions::default(),
    )
    .unwrap();

    assert!(!html.contains("<script>J</script>"));
    assert!(html.contains("&lt;script&gt;J&lt;/script&gt;"));
    assert!(html.contains("a &amp; b"));
}

#[test]
fn test_empty_listings_render_an_empty_page() {
    let html = render_page("", "", &RenderOptions::default()).unwrap();

    assert_eq!(panel(&html, "left-panel").trim(), "");
    assert_eq!(panel(&html, "right-panel").trim(), "");
}

#[test]
fn test_malformed_listing_is_a_parse_error() {
    let err = render_page(&fixture("journals.yaml"), "- [unclosed", &RenderOptions::default())
        .unwrap_err();
    assert!(err.to_string().starts_with("Parse error in '<papers>'"));
}
