use std::path::PathBuf;

/// A read or write failure for a single candidate file. Never aborts the run.
#[derive(Debug, Clone)]
pub struct FileError {
    pub path: PathBuf,
    pub message: String,
}

/// Outcome of one injection run. Built fresh per invocation; the mutated
/// files themselves are the only state carried between runs.
#[derive(Debug, Clone, Default)]
pub struct InjectionReport {
    /// Files written back (including unchanged no-anchor rewrites).
    pub processed: usize,
    /// Files that already carried the marker and were left untouched.
    pub skipped: usize,
    /// Per-file read/write failures, in visit order.
    pub errors: Vec<FileError>,
}

impl InjectionReport {
    pub fn record_error(&mut self, path: PathBuf, message: impl Into<String>) {
        self.errors.push(FileError {
            path,
            message: message.into(),
        });
    }
}
