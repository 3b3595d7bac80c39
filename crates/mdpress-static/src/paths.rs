//! Path mirroring between the source tree and the output tree.

use std::path::{Path, PathBuf};

use crate::converter::ConvertError;

/// Parent-directory step used to build relative asset prefixes.
const PARENT_STEP: &str = "../";

/// The pair of roots anchoring all path computations.
///
/// Both roots are expected to be absolute. Everything in this module is pure
/// path arithmetic; the filesystem is never touched.
#[derive(Debug, Clone)]
pub struct SiteRoots {
    base: PathBuf,
    out: PathBuf,
}

impl SiteRoots {
    /// Create roots from the base directory containing all source documents
    /// and the output directory the converted tree is mirrored under.
    pub fn new(base: impl Into<PathBuf>, out: impl Into<PathBuf>) -> Self {
        Self {
            base: base.into(),
            out: out.into(),
        }
    }

    /// Base root containing all convertible documents.
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Output root the converted tree is written under.
    pub fn out(&self) -> &Path {
        &self.out
    }

    /// Map a source document path to its mirrored output path.
    ///
    /// The document's path relative to the base root is preserved beneath the
    /// output root, with the extension replaced by `html`. Sources outside
    /// the base root are an error.
    pub fn mirror(&self, source: &Path) -> Result<PathBuf, ConvertError> {
        let relative = source
            .strip_prefix(&self.base)
            .map_err(|_| ConvertError::OutsideBaseRoot(source.display().to_string()))?;

        Ok(self.out.join(relative.with_extension("html")))
    }

    /// Relative prefix from an output document back up to the output root.
    ///
    /// One `../` per directory level between the document's directory and the
    /// output root; a document directly inside the root gets an empty prefix.
    /// Paths outside the output root also get the empty prefix, so asset
    /// links degrade to same-directory references instead of failing.
    pub fn rel_prefix(&self, output: &Path) -> String {
        let dir = output.parent().unwrap_or_else(|| Path::new(""));

        match dir.strip_prefix(&self.out) {
            Ok(relative) => PARENT_STEP.repeat(relative.components().count()),
            Err(_) => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn roots() -> SiteRoots {
        SiteRoots::new("/project", "/project/html")
    }

    #[test]
    fn mirrors_nested_paths_under_output_root() {
        let roots = roots();

        let out = roots
            .mirror(Path::new("/project/07_Design/03_DatabaseDesign/foo.md"))
            .unwrap();

        assert_eq!(
            out,
            PathBuf::from("/project/html/07_Design/03_DatabaseDesign/foo.html")
        );
        assert!(out.starts_with(roots.out()));
    }

    #[test]
    fn mirrors_documents_directly_in_base_root() {
        let out = roots().mirror(Path::new("/project/index.md")).unwrap();

        assert_eq!(out, PathBuf::from("/project/html/index.html"));
    }

    #[test]
    fn mirror_is_deterministic() {
        let roots = roots();
        let source = Path::new("/project/guide/setup.md");

        assert_eq!(roots.mirror(source).unwrap(), roots.mirror(source).unwrap());
    }

    #[test]
    fn mirror_rejects_paths_outside_base_root() {
        let result = roots().mirror(Path::new("/elsewhere/foo.md"));

        assert!(matches!(result, Err(ConvertError::OutsideBaseRoot(_))));
    }

    #[test]
    fn prefix_is_empty_at_output_root() {
        assert_eq!(roots().rel_prefix(Path::new("/project/html/a.html")), "");
    }

    #[test]
    fn prefix_steps_up_one_level() {
        assert_eq!(roots().rel_prefix(Path::new("/project/html/x/a.html")), "../");
    }

    #[test]
    fn prefix_steps_up_three_levels() {
        assert_eq!(
            roots().rel_prefix(Path::new("/project/html/x/y/z/a.html")),
            "../../../"
        );
    }

    #[test]
    fn prefix_falls_back_outside_output_root() {
        assert_eq!(roots().rel_prefix(Path::new("/somewhere/else/a.html")), "");
    }
}
