use thiserror::Error;

pub type ZrResult<T> = Result<T, ZrError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ZrError {
    #[error("Invalid verbosity level: {level} (expected 1..=6)")]
    InvalidVerbosity { level: u8 },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },
}
