//! Discovery of Markdown documents to convert.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::paths::SiteRoots;

const MARKDOWN_EXT: &str = "md";

fn is_markdown(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case(MARKDOWN_EXT))
}

/// Expand explicit path arguments into the ordered list of documents to
/// convert, or fall back to the default source directory.
///
/// Explicit files with the Markdown extension are taken as-is; explicit
/// directories are searched recursively. Arguments that do not resolve or
/// that lie outside the base root are dropped. Without arguments, the default
/// directory is searched non-recursively, in sorted order.
pub fn collect_targets(roots: &SiteRoots, args: &[PathBuf], default_source: &Path) -> Vec<PathBuf> {
    let mut targets = Vec::new();

    if args.is_empty() {
        if default_source.is_dir() {
            let mut found: Vec<PathBuf> = WalkDir::new(default_source)
                .min_depth(1)
                .max_depth(1)
                .into_iter()
                .filter_map(|e| e.ok())
                .filter(|e| e.path().is_file() && is_markdown(e.path()))
                .map(|e| e.path().to_path_buf())
                .collect();
            found.sort();
            targets.extend(found);
        }
        return targets;
    }

    for arg in args {
        let Ok(resolved) = fs::canonicalize(arg) else {
            tracing::debug!("Skipping unresolvable path: {}", arg.display());
            continue;
        };

        if !resolved.starts_with(roots.base()) {
            tracing::debug!("Skipping path outside base root: {}", resolved.display());
            continue;
        }

        if resolved.is_file() {
            if is_markdown(&resolved) {
                targets.push(resolved);
            }
        } else if resolved.is_dir() {
            for entry in WalkDir::new(&resolved)
                .follow_links(true)
                .into_iter()
                .filter_map(|e| e.ok())
            {
                let path = entry.path();
                if path.is_file() && is_markdown(path) {
                    targets.push(path.to_path_buf());
                }
            }
        }
    }

    targets
}
