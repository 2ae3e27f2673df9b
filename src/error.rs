use thiserror::Error;

/// Errors raised when configuring a [`SequenceTrie`](crate::SequenceTrie).
///
/// Symbols are required to be `Hash + Eq` at compile time, so every value that
/// reaches [`advance`](crate::SequenceTrie::advance) is a usable map key and
/// counting itself cannot fail.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrieError {
    #[error("invalid window range: min {min}, max {max} (need 1 <= min <= max)")]
    InvalidRange { min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, TrieError>;
