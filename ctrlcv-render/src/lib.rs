//! Journal and paper listings rendered as one cross-linked HTML page
//!
//!     This crate turns two hand-written YAML listings, one of journals and one of papers,
//!     into a static page with two scrollable panels. Journal article titles link to the
//!     matching paper, a paper's journal field links back to the journal, and every value
//!     has a small button that copies it to the clipboard.
//!
//!     This is a pure lib: it powers ctrlcv-cli but never prints to stdout and never
//!     reads the environment. Logging goes through `tracing`; installing a subscriber is
//!     the caller's job.
//!
//!     The file structure :
//!     .
//!     ├── error.rs
//!     ├── loader.rs               # YAML loading, tab expansion
//!     ├── ir                      # Typed journal / paper records
//!     ├── common                  # Id sanitizing, scalar text
//!     ├── formats
//!     │   └── html                # Panel renderers, page template
//!     ├── templates               # Sample listings for a first run
//!     ├── publish.rs              # Load → render → write
//!     └── lib.rs
//!
//! Pipeline
//!
//!     files → loader (serde_yaml::Value) → ir (JournalRecord / PaperRecord)
//!           → CrossRefs (block ids of both panels)
//!           → formats::html renderers (lazy iterators of markup lines)
//!           → assemble_page → output file
//!
//!     The IR step is where the loosely shaped YAML is classified. Each paper attribute
//!     becomes exactly one of the closed set of kinds in [`ir::Attribute`], so the
//!     renderers are plain matches over variants.
//!
//! Cross-references
//!
//!     Ids are derived with [`common::sanitize_id`] and assigned per panel before
//!     rendering ([`common::CrossRefs`]); links look the referenced title up in the
//!     other panel's table. The page script only looks ids up, it never derives
//!     them, so there is a single implementation of the rule. See `common/ids.rs`
//!     for the collision policy.
//!
//! Testing
//!     tests
//!     └── html
//!         ├── <testname>.rs
//!     └── fixtures
//!         ├── journals.yaml
//!         └── papers.yaml
//!
//!     Note that rust does not by default discover tests in subdirectories, so we need to include these
//!     in the mod.

pub mod common;
pub mod error;
pub mod formats;
pub mod ir;
pub mod loader;
pub mod publish;
pub mod templates;

pub use error::RenderError;
pub use formats::html::PageOptions;
pub use ir::FieldNames;
pub use publish::{publish, render_page, PublishResult, PublishSpec, RenderOptions};
