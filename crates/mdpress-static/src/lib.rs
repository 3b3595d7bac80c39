//! Mirrored Markdown-to-HTML output tree.
//!
//! Maps documents beneath a base root to standalone HTML pages beneath an
//! output root, computing the relative asset prefix each page needs to reach
//! the shared stylesheets at the output root.

pub mod collect;
pub mod converter;
pub mod paths;
pub mod templates;

pub use collect::collect_targets;
pub use converter::{ConvertError, Converter};
pub use paths::SiteRoots;
pub use templates::PageShell;
