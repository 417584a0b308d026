use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConcapError {
    #[error("pattern error: {0}")]
    Pattern(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConcapResult<T> = Result<T, ConcapError>;
