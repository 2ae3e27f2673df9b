//! # Sequence Trie - Incremental Recurring Window Counting
//!
//! Counts contiguous subsequences ("windows") of a symbol stream whose length
//! lies in a configured range `[min, max]`, reporting those that occur at
//! least twice.
//!
//! Symbols are fed one at a time. The trie keeps one node per distinct
//! sequence of length `1..=max` seen so far, and a double-buffered index of
//! the suffixes that ended at the previous position. Each new symbol extends
//! exactly those suffixes plus the root, so the input is never rescanned.
//!
//! ## Example
//!
//! ```
//! use sequence_trie::SequenceTrie;
//!
//! let mut trie = SequenceTrie::new(2, 4)?;
//! trie.extend([0, 0, 0, 0]);
//!
//! let report = trie.report();
//! assert_eq!(report.get(&[0, 0]), Some(3));
//! assert_eq!(report.get(&[0, 0, 0]), Some(2));
//! assert_eq!(report.len(), 2);
//! # Ok::<(), sequence_trie::TrieError>(())
//! ```
//!
//! ## Performance
//!
//! - O(max) work per symbol added
//! - Memory grows with the number of distinct sequences of length `<= max`
//! - Nodes live in a SlotMap arena and refer to each other by key

mod display;
mod error;
mod levels;
mod node;
pub mod oracle;
mod range;
mod report;
mod trie;


pub use error::{Result, TrieError};
pub use oracle::count_windows;
pub use range::WindowRange;
pub use report::SequenceReport;
pub use trie::{SequenceTrie, TrieStats};
