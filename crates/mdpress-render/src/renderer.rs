//! Markdown-to-HTML fragment rendering.

use pulldown_cmark::{html, Options, Parser};

/// Markdown renderer producing HTML fragments.
///
/// Tables are enabled on top of CommonMark; fenced code blocks are part of
/// the base dialect.
#[derive(Debug, Clone)]
pub struct Renderer {
    options: Options,
}

impl Renderer {
    /// Create a renderer with the documentation dialect enabled.
    pub fn new() -> Self {
        Self {
            options: Options::ENABLE_TABLES,
        }
    }

    /// Render Markdown source to an HTML fragment.
    pub fn render(&self, source: &str) -> String {
        let parser = Parser::new_ext(source, self.options);

        let mut html_output = String::new();
        html::push_html(&mut html_output, parser);

        html_output
    }
}

impl Default for Renderer {
    fn default() -> Self {
        Self::new()
    }
}
