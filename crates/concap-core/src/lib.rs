pub mod error;
pub mod types;

pub use error::{ConcapError, ConcapResult};
pub use types::{FileError, InjectionReport};
