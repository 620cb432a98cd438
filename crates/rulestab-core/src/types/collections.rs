//! Hash collections used across rulestab.

pub use rustc_hash::FxHashMap;
