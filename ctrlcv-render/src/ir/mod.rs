//! Intermediate Representation (IR) for listings.
//!
//! Parsed YAML is loosely shaped. This module turns it into typed journal and paper
//! records so the markup layer never inspects raw values.

pub mod from_yaml;
pub mod nodes;

pub use from_yaml::{classify, journal_records, paper_records, records, FieldNames};
pub use nodes::{Attribute, JournalField, JournalRecord, ListEntry, PaperRecord};
