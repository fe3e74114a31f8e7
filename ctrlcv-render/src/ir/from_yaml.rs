//! Builds the IR from parsed listing trees.
//!
//! Both listings share one outer shape: a sequence of single-key mappings, each key
//! being a record title and each value that record's details. A mapping item with
//! several keys yields several records, in key order.
//!
//! Classification happens here, once per field, so the markup layer only matches on
//! [`JournalField`] and [`Attribute`] variants.

use crate::common::{is_scalar, scalar_text};
use crate::ir::nodes::{Attribute, JournalField, JournalRecord, ListEntry, PaperRecord};
use serde_yaml::{Mapping, Value};
use tracing::{debug, warn};

/// Field names that get special treatment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldNames {
    /// Journal field holding the article list.
    pub articles: String,
    /// Paper field holding the multi-line abstract.
    pub abstract_key: String,
    /// Paper field naming the journal it appeared in.
    pub journal: String,
    /// Label used for a keyed list entry whose detail is a bare value.
    pub value_label: String,
}

impl Default for FieldNames {
    fn default() -> Self {
        Self {
            articles: "文章".to_string(),
            abstract_key: "摘要".to_string(),
            journal: "期刊".to_string(),
            value_label: "值".to_string(),
        }
    }
}

/// Iterate `(title, details)` pairs of a listing in source order.
pub fn records(root: &Value) -> Box<dyn Iterator<Item = (String, &Value)> + '_> {
    match root {
        Value::Sequence(items) => Box::new(items.iter().flat_map(|item| match item {
            Value::Mapping(map) => map
                .iter()
                .map(|(key, details)| (scalar_text(key), details))
                .collect::<Vec<_>>(),
            other => {
                debug!(item = ?other, "skipping non-mapping listing item");
                Vec::new()
            }
        })),
        Value::Null => Box::new(std::iter::empty()),
        other => {
            warn!(
                kind = value_kind(other),
                "listing root is not a sequence, nothing to render"
            );
            Box::new(std::iter::empty())
        }
    }
}

/// Lazily convert a journal listing to records.
pub fn journal_records<'a>(
    root: &'a Value,
    fields: &'a FieldNames,
) -> impl Iterator<Item = JournalRecord> + 'a {
    records(root).map(move |(name, details)| {
        debug!(journal = %name, "building journal record");
        JournalRecord {
            fields: mapping_of(details)
                .map(|map| journal_fields(map, fields))
                .unwrap_or_default(),
            name,
        }
    })
}

/// Lazily convert a paper listing to records.
pub fn paper_records<'a>(
    root: &'a Value,
    fields: &'a FieldNames,
) -> impl Iterator<Item = PaperRecord> + 'a {
    records(root).map(move |(title, details)| {
        debug!(paper = %title, "building paper record");
        PaperRecord {
            attributes: mapping_of(details)
                .map(|map| map.iter().map(|(k, v)| classify(k, v, fields)).collect())
                .unwrap_or_default(),
            title,
        }
    })
}

fn journal_fields(map: &Mapping, fields: &FieldNames) -> Vec<JournalField> {
    map.iter()
        .map(|(key, value)| {
            let label = scalar_text(key);
            match value {
                Value::Sequence(items) if label == fields.articles => JournalField::Articles {
                    titles: items.iter().flat_map(entry_titles).collect(),
                    label,
                },
                _ => JournalField::Plain {
                    value: scalar_text(value),
                    label,
                },
            }
        })
        .collect()
}

/// Titles contributed by one article list element: every key of a mapping, or the
/// element's own text.
fn entry_titles(item: &Value) -> Vec<String> {
    match item {
        Value::Mapping(map) => map.keys().map(scalar_text).collect(),
        other => vec![scalar_text(other)],
    }
}

/// Decide the kind of a paper attribute.
pub fn classify(key: &Value, value: &Value, fields: &FieldNames) -> Attribute {
    let label = scalar_text(key);

    if label == fields.abstract_key {
        let text = match value {
            Value::String(s) => Some(s.trim().to_string()),
            _ => None,
        };
        return Attribute::Abstract { label, text };
    }

    if label == fields.journal && is_scalar(value) {
        return Attribute::JournalRef {
            journal: scalar_text(value),
            label,
        };
    }

    match value {
        Value::Sequence(items) => Attribute::List {
            entries: items
                .iter()
                .flat_map(|item| list_entries(item, fields))
                .collect(),
            label,
        },
        Value::Mapping(map) => Attribute::Nested {
            pairs: flatten(map),
            label,
        },
        other => Attribute::Plain {
            value: scalar_text(other),
            label,
        },
    }
}

fn list_entries(item: &Value, fields: &FieldNames) -> Vec<ListEntry> {
    match item {
        Value::Mapping(map) => {
            if map.len() > 1 {
                debug!(keys = map.len(), "list element with several keys");
            }
            map.iter()
                .map(|(key, detail)| ListEntry::Keyed {
                    key: scalar_text(key),
                    details: match detail {
                        Value::Mapping(inner) => flatten(inner),
                        Value::Null => Vec::new(),
                        other => vec![(fields.value_label.clone(), scalar_text(other))],
                    },
                })
                .collect()
        }
        other => vec![ListEntry::Item(scalar_text(other))],
    }
}

fn flatten(map: &Mapping) -> Vec<(String, String)> {
    map.iter()
        .map(|(k, v)| (scalar_text(k), scalar_text(v)))
        .collect()
}

fn mapping_of(value: &Value) -> Option<&Mapping> {
    match value {
        Value::Mapping(map) => Some(map),
        Value::Tagged(tagged) => mapping_of(&tagged.value),
        _ => None,
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged",
    }
}
