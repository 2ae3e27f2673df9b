use crate::error::{Result, TrieError};

/// Inclusive bounds on the length of the windows being counted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WindowRange {
    min: usize,
    max: usize,
}

impl WindowRange {
    /// Validates and creates a range.
    ///
    /// Fails with [`TrieError::InvalidRange`] when `min < 1` or `max < min`.
    pub fn new(min: usize, max: usize) -> Result<Self> {
        if min < 1 || max < min {
            return Err(TrieError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Shortest reported window length.
    pub fn min(&self) -> usize {
        self.min
    }

    /// Longest tracked window length, i.e. the trie's maximum depth.
    pub fn max(&self) -> usize {
        self.max
    }

    /// Returns true if a window of `len` symbols falls inside the range.
    pub fn contains(&self, len: usize) -> bool {
        self.min <= len && len <= self.max
    }

    /// Largest remaining depth a node may have and still be reported.
    pub fn span(&self) -> usize {
        self.max - self.min
    }
}
