//! Pattern identity and per-class statistics.
//!
//! A pattern is the canonical string form of a rule's antecedent vector.
//! Counts and usage merge additively across trials; quality scores keep the
//! first value observed.

pub mod codec;
pub mod extractor;
pub mod merge;
pub mod stats;

pub use codec::{decode, encode, Pattern};
pub use extractor::{extract, extract_all_classes, Extraction};
pub use merge::{merge_additive, merge_first_write_wins, OrderedMap};
pub use stats::{ClassStats, PatternStats, VariableUsageCounter};
