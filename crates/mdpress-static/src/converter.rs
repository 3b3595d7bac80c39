//! Single-document conversion pipeline.

use std::fs;
use std::path::{Path, PathBuf};

use mdpress_render::Renderer;

use crate::paths::SiteRoots;
use crate::templates::PageShell;

/// Errors that can occur while converting a document.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error("Failed to read source: {0}")]
    ReadError(String),

    #[error("Source is not under the base root: {0}")]
    OutsideBaseRoot(String),

    #[error("Failed to render page shell: {0}")]
    TemplateError(String),

    #[error("Failed to write output: {0}")]
    WriteError(String),
}

/// Converts Markdown documents into mirrored standalone HTML pages.
pub struct Converter {
    roots: SiteRoots,
    renderer: Renderer,
    shell: PageShell,
}

impl Converter {
    /// Create a converter for the given roots.
    pub fn new(roots: SiteRoots) -> Self {
        Self {
            roots,
            renderer: Renderer::new(),
            shell: PageShell::new(),
        }
    }

    /// The roots this converter mirrors between.
    pub fn roots(&self) -> &SiteRoots {
        &self.roots
    }

    /// Convert a single document and return the path it was written to.
    ///
    /// Reads the source, renders it to an HTML fragment, mirrors the path
    /// beneath the output root, wraps the fragment in the page shell with the
    /// relative asset prefix for that depth, and writes the result. Missing
    /// output directories are created along the way.
    pub fn convert(&self, source: &Path) -> Result<PathBuf, ConvertError> {
        let source = fs::canonicalize(source)
            .map_err(|e| ConvertError::ReadError(format!("{}: {}", source.display(), e)))?;

        let content = fs::read_to_string(&source)
            .map_err(|e| ConvertError::ReadError(format!("{}: {}", source.display(), e)))?;

        let fragment = self.renderer.render(&content);

        let output = self.roots.mirror(&source)?;

        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|e| ConvertError::WriteError(e.to_string()))?;
        }

        let rel_prefix = self.roots.rel_prefix(&output);

        let title = source
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");

        let page = self
            .shell
            .render(title, &rel_prefix, &fragment)
            .map_err(|e| ConvertError::TemplateError(e.to_string()))?;

        fs::write(&output, page).map_err(|e| ConvertError::WriteError(e.to_string()))?;

        tracing::debug!("Converted {} -> {}", source.display(), output.display());

        Ok(output)
    }
}
