//! Shared helpers used by both panels

pub mod ids;
pub mod scalar;

pub use ids::{journal_id, sanitize_id, CrossRefs, IdRegistry, PanelIds};
pub use scalar::{is_scalar, scalar_text};
