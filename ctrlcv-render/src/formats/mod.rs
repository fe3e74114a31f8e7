//! Output formats
//!
//! Only HTML is produced today; the panel renderers and page template live in
//! [`html`].

pub mod html;

pub use html::{
    assemble_page, get_default_css, render_journals, render_papers, PageOptions,
    DEFAULT_SEPARATORS,
};
