use thiserror::Error;

#[derive(Error, Debug)]
pub enum RedactorError {
    #[error("Entity source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, RedactorError>;
