//! Markdown rendering for mdpress.
//!
//! Thin wrapper around pulldown-cmark configured for the documentation
//! dialect (tables and fenced code blocks).

pub mod renderer;

pub use renderer::Renderer;
