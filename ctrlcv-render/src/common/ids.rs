//! Element ids derived from display titles
//!
//! Every record block gets an `id` computed from its title. Ids are assigned per panel
//! up front ([`PanelIds`]), and cross-references look the referenced title up in the
//! other panel's table, so a link always lands on the block carrying that exact title,
//! even when two different titles sanitize to the same text.
//!
//! The rule:
//!
//! 1. spaces and hyphens become underscores
//! 2. every character outside the Unicode word class is dropped
//! 3. an empty result becomes [`PLACEHOLDER_ID`]
//!
//! The word class is the Unicode one (`\w` of the `regex` crate), so CJK titles keep
//! their characters and stay distinguishable.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};
use tracing::warn;

/// Characters kept by [`sanitize_id`], as a regex class body.
pub const WORD_CLASS: &str = r"\p{Alphabetic}\p{M}\p{Nd}\p{Pc}\p{Join_Control}";

/// Substituted when a title sanitizes to nothing.
pub const PLACEHOLDER_ID: &str = "untitled";

/// Prefix separating journal block ids from paper block ids.
pub const JOURNAL_ID_PREFIX: &str = "journal-";

static NON_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(&format!("[^{WORD_CLASS}]")).expect("word class is a valid regex"));

/// Convert arbitrary text into a markup-safe identifier.
pub fn sanitize_id(text: &str) -> String {
    let underscored = text.replace([' ', '-'], "_");
    let cleaned = NON_WORD.replace_all(&underscored, "");
    if cleaned.is_empty() {
        PLACEHOLDER_ID.to_string()
    } else {
        cleaned.into_owned()
    }
}

/// Id of the journal block for a raw journal name.
pub fn journal_id(name: &str) -> String {
    format!("{JOURNAL_ID_PREFIX}{}", sanitize_id(name))
}

/// Hands out unique ids within one panel.
///
/// The first title claiming a sanitized id keeps it. Later claimants get `_2`, `_3`,
/// ... and a warning.
#[derive(Debug, Default)]
pub struct IdRegistry {
    taken: HashSet<String>,
}

impl IdRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim an id for `title`, disambiguating if it is already taken.
    pub fn claim(&mut self, title: &str) -> String {
        let base = sanitize_id(title);
        if self.taken.insert(base.clone()) {
            return base;
        }

        let mut counter = 2;
        loop {
            let candidate = format!("{base}_{counter}");
            if self.taken.insert(candidate.clone()) {
                warn!(title, id = %candidate, "duplicate element id, disambiguated");
                return candidate;
            }
            counter += 1;
        }
    }
}

/// Block ids of one panel, in record order, plus the title lookup links use.
#[derive(Debug, Clone, Default)]
pub struct PanelIds {
    prefix: &'static str,
    blocks: Vec<String>,
    by_title: HashMap<String, String>,
}

impl PanelIds {
    /// Assign ids to `titles` in order, each prefixed with `prefix`.
    ///
    /// A repeated title gets its own block id, but links to it resolve to the first
    /// block with that title.
    pub fn assign<'t>(prefix: &'static str, titles: impl IntoIterator<Item = &'t str>) -> Self {
        let mut registry = IdRegistry::new();
        let mut blocks = Vec::new();
        let mut by_title = HashMap::new();
        for title in titles {
            let id = format!("{prefix}{}", registry.claim(title));
            by_title
                .entry(title.to_string())
                .or_insert_with(|| id.clone());
            blocks.push(id);
        }
        Self {
            prefix,
            blocks,
            by_title,
        }
    }

    /// Id of the `index`-th block.
    pub fn block(&self, index: usize) -> Option<&str> {
        self.blocks.get(index).map(String::as_str)
    }

    pub fn blocks(&self) -> &[String] {
        &self.blocks
    }

    /// Id a link to `title` targets.
    ///
    /// Titles without a block fall back to the plain sanitized form; such a link
    /// resolves only if some block happens to carry that id.
    pub fn target(&self, title: &str) -> String {
        match self.by_title.get(title) {
            Some(id) => id.clone(),
            None => format!("{}{}", self.prefix, sanitize_id(title)),
        }
    }
}

/// Id tables of both panels.
#[derive(Debug, Clone, Default)]
pub struct CrossRefs {
    pub journals: PanelIds,
    pub papers: PanelIds,
}

impl CrossRefs {
    pub fn new<'j, 'p>(
        journal_names: impl IntoIterator<Item = &'j str>,
        paper_titles: impl IntoIterator<Item = &'p str>,
    ) -> Self {
        Self {
            journals: PanelIds::assign(JOURNAL_ID_PREFIX, journal_names),
            papers: PanelIds::assign("", paper_titles),
        }
    }
}
