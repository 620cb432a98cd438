//! Shared types for rulestab.

pub mod collections;
pub mod fuzzy;

pub use collections::FxHashMap;
pub use fuzzy::FuzzySetKind;
