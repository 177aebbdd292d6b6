use thiserror::Error;

pub type FlResult<T> = Result<T, FlError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FlError {
    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Integer overflow while computing {what}")]
    Overflow { what: &'static str },

    #[error("Invariant violated: {what}")]
    Invariant { what: &'static str },
}
