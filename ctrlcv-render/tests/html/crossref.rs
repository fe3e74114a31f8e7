//! Cross-reference resolution between the two panels

use crate::common::{attr_values, fixture_page, panel};
use ctrlcv_render::common::{journal_id, sanitize_id, CrossRefs};
use ctrlcv_render::formats::html::{render_journals, render_papers, DEFAULT_SEPARATORS};
use ctrlcv_render::ir::{Attribute, JournalRecord, PaperRecord};
use ctrlcv_render::{render_page, RenderOptions};
use proptest::prelude::*;
use std::collections::HashSet;

fn render_pair(journal: &str) -> (Vec<String>, Vec<String>) {
    let separators: Vec<String> = DEFAULT_SEPARATORS.iter().map(|s| s.to_string()).collect();
    let refs = CrossRefs::new([journal], ["P"]);
    let journals = render_journals(
        vec![JournalRecord {
            name: journal.to_string(),
            fields: vec![],
        }],
        &refs,
    )
    .collect::<Result<Vec<_>, _>>()
    .unwrap();
    let papers = render_papers(
        vec![PaperRecord {
            title: "P".to_string(),
            attributes: vec![Attribute::JournalRef {
                label: "期刊".to_string(),
                journal: journal.to_string(),
            }],
        }],
        &refs,
        &separators,
    )
    .collect::<Result<Vec<_>, _>>()
    .unwrap();
    (journals, papers)
}

#[test]
fn every_link_in_the_fixture_resolves() {
    let html = fixture_page();
    let journals = panel(&html, "left-panel");
    let papers = panel(&html, "right-panel");

    let journal_ids: HashSet<_> = attr_values(journals, "id").into_iter().collect();
    let paper_ids: HashSet<_> = attr_values(papers, "id").into_iter().collect();

    let article_targets = attr_values(journals, "data-target");
    let journal_targets = attr_values(papers, "data-target");
    assert!(!article_targets.is_empty());
    assert!(!journal_targets.is_empty());

    for target in article_targets {
        assert!(paper_ids.contains(&target), "unresolved article link {target}");
    }
    for target in journal_targets {
        assert!(journal_ids.contains(&target), "unresolved journal link {target}");
    }
}

#[test]
fn journal_link_targets_use_the_raw_name() {
    let (journals, papers) = render_pair("Nature Communications - Biology");
    let expected = "journal-Nature_Communications___Biology";

    assert!(journals[1].contains(&format!(r#"id="{expected}""#)));
    assert!(papers[2].contains(&format!(r#"data-target="{expected}""#)));
    assert!(papers[2].contains(">Nature Communications - Biology</a>"));
}

#[test]
fn colliding_names_link_to_their_own_blocks() {
    let html = render_page(
        "- A B:\n    文章:\n        - p q\n- A-B:\n    文章:\n        - p-q\n",
        "- p q:\n    期刊: A B\n- p-q:\n    期刊: A-B\n",
        &RenderOptions::default(),
    )
    .unwrap();
    let journals = panel(&html, "left-panel");
    let papers = panel(&html, "right-panel");

    assert_eq!(attr_values(journals, "id"), vec!["journal-A_B", "journal-A_B_2"]);
    assert_eq!(attr_values(papers, "id"), vec!["p_q", "p_q_2"]);
    assert_eq!(attr_values(journals, "data-target"), vec!["p_q", "p_q_2"]);
    assert_eq!(
        attr_values(papers, "data-target"),
        vec!["journal-A_B", "journal-A_B_2"]
    );
}

proptest! {
    #[test]
    fn sanitize_is_deterministic(text in ".*") {
        prop_assert_eq!(sanitize_id(&text), sanitize_id(&text));
    }

    #[test]
    fn sanitized_ids_are_nonempty_word_strings(text in ".*") {
        let id = sanitize_id(&text);
        prop_assert!(!id.is_empty());
        prop_assert!(!id.contains(|c: char| c == ' ' || c == '-' || c == '"' || c == '<'));
    }

    #[test]
    fn journal_block_and_reference_ids_agree(name in "[A-Za-z0-9 \\-:&.\u{4e00}-\u{4e20}]{0,24}") {
        let (journals, papers) = render_pair(&name);
        let block_ids = attr_values(&journals[1], "id");
        let link_targets = attr_values(&papers[2], "data-target");

        prop_assert_eq!(block_ids.len(), 1);
        prop_assert_eq!(&block_ids, &link_targets);
        prop_assert_eq!(&block_ids[0], &journal_id(&name));
    }
}
