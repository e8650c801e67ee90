use thiserror::Error;

pub type Result<T> = std::result::Result<T, SortError>;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SortError {
    /// A gap outside `[1, len - 1]`.
    #[error("gap {gap} is out of range for a slice of length {len}")]
    InvalidGap { gap: usize, len: usize },

    #[error("statistics window must hold at least one insertion")]
    InvalidWindow,

    /// Every tracked pass was empty, so the ratio has a zero denominator.
    #[error("no windowed statistics were collected")]
    NoStatistics,
}
