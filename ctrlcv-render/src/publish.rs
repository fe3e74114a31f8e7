//! Page publishing pipeline.
//!
//! Provides the one-call API behind `ctrlcv generate`: load both listings, render both
//! panels, assemble the page and write it. The run is all-or-nothing; the output file
//! is only written once everything before it succeeded.
//!
//! For in-memory rendering (tests, previews) use [`render_page`].

use crate::common::CrossRefs;
use crate::error::RenderError;
use crate::formats::html::{assemble_page, render_journals, render_papers, PageOptions};
use crate::ir::{journal_records, paper_records, FieldNames, JournalRecord, PaperRecord};
use crate::loader::{load_yaml, parse_yaml, DEFAULT_TAB_WIDTH};
use serde_yaml::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Everything a render needs besides the listings themselves.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderOptions {
    /// Spaces substituted for each tab before parsing
    pub tab_width: usize,
    /// Special field names
    pub fields: FieldNames,
    /// Page template knobs
    pub page: PageOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tab_width: DEFAULT_TAB_WIDTH,
            fields: FieldNames::default(),
            page: PageOptions::default(),
        }
    }
}

/// Specifies one page to publish.
///
/// ```ignore
/// let spec = PublishSpec::new("Journals.yaml", "Papers.yaml", "ExCiting.html");
/// let result = publish(&spec)?;
/// ```
#[derive(Debug, Clone)]
pub struct PublishSpec {
    pub journals: PathBuf,
    pub papers: PathBuf,
    pub output: PathBuf,
    pub options: RenderOptions,
}

impl PublishSpec {
    pub fn new(
        journals: impl AsRef<Path>,
        papers: impl AsRef<Path>,
        output: impl AsRef<Path>,
    ) -> Self {
        Self {
            journals: journals.as_ref().to_path_buf(),
            papers: papers.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            options: RenderOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.options = options;
        self
    }
}

/// Result of a publish operation.
#[derive(Debug, Clone, PartialEq)]
pub struct PublishResult {
    /// Path of the written page
    pub output: PathBuf,
    /// Size of the written page in bytes
    pub bytes: usize,
}

/// Load, render and write the page described by `spec`.
pub fn publish(spec: &PublishSpec) -> Result<PublishResult, RenderError> {
    let journals = load_yaml(&spec.journals, spec.options.tab_width)?;
    let papers = load_yaml(&spec.papers, spec.options.tab_width)?;

    let html = render_trees(&journals, &papers, &spec.options)?;

    fs::write(&spec.output, &html).map_err(|e| RenderError::io(&spec.output, e))?;
    info!(output = %spec.output.display(), bytes = html.len(), "page written");

    Ok(PublishResult {
        output: spec.output.clone(),
        bytes: html.len(),
    })
}

/// Render a page from listing source text.
pub fn render_page(
    journals_src: &str,
    papers_src: &str,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let journals =
        parse_yaml(journals_src, options.tab_width).map_err(|e| RenderError::parse("<journals>", e))?;
    let papers =
        parse_yaml(papers_src, options.tab_width).map_err(|e| RenderError::parse("<papers>", e))?;
    render_trees(&journals, &papers, options)
}

/// Render a page from already parsed listings.
///
/// Records of both listings are collected first so every block id is known before
/// any link is written.
pub fn render_trees(
    journals: &Value,
    papers: &Value,
    options: &RenderOptions,
) -> Result<String, RenderError> {
    let journals: Vec<JournalRecord> = journal_records(journals, &options.fields).collect();
    let papers: Vec<PaperRecord> = paper_records(papers, &options.fields).collect();
    let refs = CrossRefs::new(
        journals.iter().map(|j| j.name.as_str()),
        papers.iter().map(|p| p.title.as_str()),
    );

    let journal_lines = render_journals(journals, &refs).collect::<Result<Vec<_>, _>>()?;
    let paper_lines = render_papers(papers, &refs, &options.page.separators)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(assemble_page(journal_lines, paper_lines, &options.page))
}
