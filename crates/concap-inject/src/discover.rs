use std::collections::HashSet;
use std::path::{Path, PathBuf};

use concap_core::{ConcapError, ConcapResult, InjectionReport};
use tracing::debug;

/// Candidate globs in priority order: common build-output directories first,
/// then loose HTML at the project root.
pub const OUTPUT_PATTERNS: &[&str] = &[
    "dist/**/*.html",
    "build/**/*.html",
    "out/**/*.html",
    "_site/**/*.html",
    "public/**/*.html",
    "*.html",
];

const DEPENDENCY_DIR: &str = "node_modules";

/// Resolve the fixed pattern list under `root`. Paths come back in
/// first-match order across patterns, deduplicated, with anything under a
/// dependency directory dropped. Unreadable directory entries are recorded
/// on the report as per-file errors; only a malformed pattern is fatal.
pub fn discover_files(root: &Path, report: &mut InjectionReport) -> ConcapResult<Vec<PathBuf>> {
    resolve_patterns(root, OUTPUT_PATTERNS, report)
}

fn resolve_patterns(
    root: &Path,
    patterns: &[&str],
    report: &mut InjectionReport,
) -> ConcapResult<Vec<PathBuf>> {
    let mut seen: HashSet<PathBuf> = HashSet::new();
    let mut files = Vec::new();

    for pattern in patterns {
        let scoped = root.join(pattern);
        let scoped = scoped
            .to_str()
            .ok_or_else(|| ConcapError::Pattern(format!("non-utf8 path: {}", root.display())))?;

        let entries = glob::glob(scoped).map_err(|e| ConcapError::Pattern(e.to_string()))?;

        for entry in entries {
            match entry {
                Ok(path) => {
                    if under_dependency_dir(&path) {
                        debug!(path = %path.display(), "excluded dependency directory entry");
                        continue;
                    }
                    if seen.insert(path.clone()) {
                        files.push(path);
                    }
                }
                Err(e) => {
                    let path = e.path().to_path_buf();
                    report.record_error(path, e.to_string());
                }
            }
        }
    }

    Ok(files)
}

fn under_dependency_dir(path: &Path) -> bool {
    path.components().any(|c| c.as_os_str() == DEPENDENCY_DIR)
}
