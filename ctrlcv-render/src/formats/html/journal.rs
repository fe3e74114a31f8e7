//! Journal panel (left side)
//!
//! | IR                       | Markup                                                    |
//! |--------------------------|-----------------------------------------------------------|
//! | `JournalRecord`          | spacer + `<div class="journal-item" id="journal-…">`      |
//! | `JournalField::Articles` | label line + one `l2` line per title with a `goto` link   |
//! | `JournalField::Plain`    | `l1` label/value line                                     |
//!
//! Block ids come from `refs.journals`, in record order. Article links target the id
//! `refs.papers` assigned to the paper with that exact title.

use super::markup::{
    append, copy_line_button, goto_link, label_line, label_value_line, line, record_header,
    spacer, to_markup,
};
use super::PAPER_PANEL;
use crate::common::ids::CrossRefs;
use crate::error::RenderError;
use crate::ir::nodes::{JournalField, JournalRecord};
use markup5ever_rcdom::Handle;

/// Render journal records to markup lines, lazily and in order.
///
/// `refs` must have been built from the same records, in the same order.
pub fn render_journals<'a, I>(
    records: I,
    refs: &'a CrossRefs,
) -> impl Iterator<Item = Result<String, RenderError>> + 'a
where
    I: IntoIterator<Item = JournalRecord>,
    I::IntoIter: 'a,
{
    records
        .into_iter()
        .enumerate()
        .flat_map(move |(index, record)| journal_nodes(index, &record, refs))
        .map(|node| to_markup(&node))
}

fn journal_nodes(index: usize, record: &JournalRecord, refs: &CrossRefs) -> Vec<Handle> {
    let id = match refs.journals.block(index) {
        Some(id) => id.to_string(),
        None => refs.journals.target(&record.name),
    };
    let mut nodes = vec![
        spacer(),
        record_header("journal-item", &id, "journal-name", &record.name),
    ];

    for field in &record.fields {
        match field {
            JournalField::Articles { label, titles } => {
                nodes.push(label_line(1, label));
                for title in titles {
                    let div = line(2, None);
                    append(&div, copy_line_button());
                    append(&div, goto_link(PAPER_PANEL, &refs.papers.target(title), title));
                    nodes.push(div);
                }
            }
            JournalField::Plain { label, value } => {
                nodes.push(label_value_line(1, label, value));
            }
        }
    }

    nodes
}
