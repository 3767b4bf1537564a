use derivative::Derivative;
use thiserror::Error;

#[derive(Error, PartialEq, Eq, PartialOrd, Ord, Clone, Hash, Derivative)]
#[derivative(Debug)]
pub enum TError {
    #[error("value at {0:#x} is neither the canonical TRUE nor the canonical FALSE")]
    UnrecognizedEncoding(usize),

    #[error("failed to write output: {0}")]
    FailedWrite(String),
}

impl From<std::io::Error> for TError {
    fn from(error: std::io::Error) -> Self {
        TError::FailedWrite(error.to_string())
    }
}
