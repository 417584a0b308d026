pub mod discover;
pub mod inject;
pub mod run;

pub use discover::OUTPUT_PATTERNS;
pub use inject::MARKER;
pub use run::{run, run_in};
