//! Core data structures for the Intermediate Representation (IR).

/// One journal block in the left panel.
#[derive(Debug, Clone, PartialEq)]
pub struct JournalRecord {
    pub name: String,
    pub fields: Vec<JournalField>,
}

/// A field under a journal.
#[derive(Debug, Clone, PartialEq)]
pub enum JournalField {
    /// The article list; each title links to the paper block of the same title.
    Articles { label: String, titles: Vec<String> },
    /// Any other field, shown as `label: value`.
    Plain { label: String, value: String },
}

/// One paper block in the right panel.
#[derive(Debug, Clone, PartialEq)]
pub struct PaperRecord {
    pub title: String,
    pub attributes: Vec<Attribute>,
}

/// A paper attribute, classified once by field name and value shape.
#[derive(Debug, Clone, PartialEq)]
pub enum Attribute {
    /// `label: value` on one line.
    Plain { label: String, value: String },
    /// Multi-line text block with a copy-all control.
    ///
    /// `text` is `None` when the abstract field holds something other than a string;
    /// only the label line is rendered then.
    Abstract { label: String, text: Option<String> },
    /// Link to the journal block named `journal`.
    JournalRef { label: String, journal: String },
    /// Sub-list with join-and-copy controls.
    List { label: String, entries: Vec<ListEntry> },
    /// Mapping flattened into sibling `label: value` lines.
    Nested {
        label: String,
        pairs: Vec<(String, String)>,
    },
}

/// An element of a list attribute.
#[derive(Debug, Clone, PartialEq)]
pub enum ListEntry {
    /// Plain element.
    Item(String),
    /// Element keyed by a name with its own detail lines (e.g. an author and affiliation).
    Keyed {
        key: String,
        details: Vec<(String, String)>,
    },
}

impl ListEntry {
    /// Text used when the list is joined and copied.
    pub fn label(&self) -> &str {
        match self {
            ListEntry::Item(text) => text,
            ListEntry::Keyed { key, .. } => key,
        }
    }
}

impl Attribute {
    pub fn label(&self) -> &str {
        match self {
            Attribute::Plain { label, .. }
            | Attribute::Abstract { label, .. }
            | Attribute::JournalRef { label, .. }
            | Attribute::List { label, .. }
            | Attribute::Nested { label, .. } => label,
        }
    }
}
