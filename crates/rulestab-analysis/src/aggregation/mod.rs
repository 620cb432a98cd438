//! Cross-trial aggregation.
//!
//! Trials are folded one at a time, in trial-index order. Counts and usage
//! add up; a pattern's score is the one from the first trial that produced
//! it.

pub mod aggregator;
pub mod state;

pub use aggregator::{aggregate, StabilityAggregator};
pub use state::AggregateState;
