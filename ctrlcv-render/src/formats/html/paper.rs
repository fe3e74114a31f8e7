//! Paper panel (right side)
//!
//! | IR                      | Markup                                                           |
//! |-------------------------|------------------------------------------------------------------|
//! | `PaperRecord`           | spacer + `<div class="article-item" id="…">`                     |
//! | `Attribute::Abstract`   | label line with copy-abstract button + `l2 multiline` text block |
//! | `Attribute::JournalRef` | label line with copy-value button + `goto` link to the journal   |
//! | `Attribute::List`       | label line with one join button per separator + `l2` entries     |
//! | `Attribute::Nested`     | label line + `l1` label/value line per pair                      |
//! | `Attribute::Plain`      | `l1` label/value line                                            |
//!
//! Keyed list entries carry their details as `l3` label/value lines. Block ids come
//! from `refs.papers`; journal links target the id `refs.journals` assigned to the
//! journal with that exact name.

use super::markup::{
    append, copy_abstract_button, copy_joined_button, copy_line_button, copy_value_button,
    create_text, goto_link, label_line, label_value_line, line, record_header, spacer, span,
    to_markup,
};
use super::JOURNAL_PANEL;
use crate::common::ids::CrossRefs;
use crate::error::RenderError;
use crate::ir::nodes::{Attribute, ListEntry, PaperRecord};
use markup5ever_rcdom::Handle;

/// Render paper records to markup lines, lazily and in order.
///
/// `refs` must have been built from the same records, in the same order.
/// `separators` are the join delimiters offered next to every list attribute.
pub fn render_papers<'a, I>(
    records: I,
    refs: &'a CrossRefs,
    separators: &'a [String],
) -> impl Iterator<Item = Result<String, RenderError>> + 'a
where
    I: IntoIterator<Item = PaperRecord>,
    I::IntoIter: 'a,
{
    records
        .into_iter()
        .enumerate()
        .flat_map(move |(index, record)| match paper_nodes(index, &record, refs, separators) {
            Ok(nodes) => nodes.into_iter().map(Ok).collect::<Vec<_>>(),
            Err(e) => vec![Err(e)],
        })
        .map(|node| node.and_then(|node| to_markup(&node)))
}

fn paper_nodes(
    index: usize,
    record: &PaperRecord,
    refs: &CrossRefs,
    separators: &[String],
) -> Result<Vec<Handle>, RenderError> {
    let id = match refs.papers.block(index) {
        Some(id) => id.to_string(),
        None => refs.papers.target(&record.title),
    };
    let mut nodes = vec![
        spacer(),
        record_header("article-item", &id, "article-title", &record.title),
    ];

    for attribute in &record.attributes {
        attribute_nodes(attribute, refs, separators, &mut nodes)?;
    }

    Ok(nodes)
}

fn attribute_nodes(
    attribute: &Attribute,
    refs: &CrossRefs,
    separators: &[String],
    nodes: &mut Vec<Handle>,
) -> Result<(), RenderError> {
    match attribute {
        Attribute::Abstract { label, text } => {
            let div = label_line(1, label);
            append(&div, copy_abstract_button());
            nodes.push(div);
            if let Some(text) = text {
                let block = line(2, Some("multiline"));
                append(&block, create_text(text));
                nodes.push(block);
            }
        }

        Attribute::JournalRef { label, journal } => {
            let div = label_line(1, label);
            append(&div, copy_value_button());
            append(&div, goto_link(JOURNAL_PANEL, &refs.journals.target(journal), journal));
            nodes.push(div);
        }

        Attribute::List { label, entries } => {
            let labels: Vec<&str> = entries.iter().map(ListEntry::label).collect();
            let items_json = serde_json::to_string(&labels)?;

            let div = label_line(1, label);
            for separator in separators {
                append(&div, copy_joined_button(separator, &items_json));
            }
            nodes.push(div);

            for entry in entries {
                let div = line(2, None);
                append(&div, copy_line_button());
                match entry {
                    ListEntry::Item(text) => {
                        append(&div, span("list-item", text));
                        nodes.push(div);
                    }
                    ListEntry::Keyed { key, details } => {
                        append(&div, span("sub-item", key));
                        nodes.push(div);
                        for (detail_label, value) in details {
                            nodes.push(label_value_line(3, detail_label, value));
                        }
                    }
                }
            }
        }

        Attribute::Nested { label, pairs } => {
            nodes.push(label_line(1, label));
            for (key, value) in pairs {
                nodes.push(label_value_line(1, key, value));
            }
        }

        Attribute::Plain { label, value } => {
            nodes.push(label_value_line(1, label, value));
        }
    }

    Ok(())
}
