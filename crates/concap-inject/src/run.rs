use std::fs;
use std::path::Path;

use concap_core::{ConcapResult, InjectionReport};
use tracing::{debug, info, warn};

use crate::discover::discover_files;
use crate::inject::{already_injected, inject_capture_block};

/// Run the injector against the current working directory. Zero-argument
/// entry point for post-build invocation.
pub fn run() -> ConcapResult<InjectionReport> {
    let cwd = std::env::current_dir()?;
    run_in(&cwd)
}

/// Run the injector against `root`. Files are visited one at a time with
/// blocking I/O; a read or write failure is recorded on the report and the
/// run moves on to the next file. Only discovery failures propagate.
pub fn run_in(root: &Path) -> ConcapResult<InjectionReport> {
    let mut report = InjectionReport::default();
    let files = discover_files(root, &mut report)?;

    for path in files {
        let content = match fs::read_to_string(&path) {
            Ok(c) => c,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "read failed");
                report.record_error(path, e.to_string());
                continue;
            }
        };

        if already_injected(&content) {
            debug!(path = %path.display(), "capture script already present, skipping");
            report.skipped += 1;
            continue;
        }

        // Anchorless content comes back unchanged and is still written.
        let updated = inject_capture_block(&content);

        if let Err(e) = fs::write(&path, &updated) {
            warn!(path = %path.display(), error = %e, "write failed");
            report.record_error(path, e.to_string());
            continue;
        }

        report.processed += 1;
        info!(path = %path.display(), "injected console capture");
    }

    Ok(report)
}
