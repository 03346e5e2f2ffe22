use thiserror::Error;

#[derive(Error, Debug)]
pub enum CandidateError {
    #[error("Input file not found: {path}")]
    NotFound { path: String },
    #[error("Parse error on line {line} ({content:?}): {reason}")]
    Parse {
        line: usize,
        content: String,
        reason: String,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

pub type CandidateResult<T> = std::result::Result<T, CandidateError>;
