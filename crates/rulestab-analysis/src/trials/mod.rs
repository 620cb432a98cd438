//! Multi-trial orchestration.
//!
//! Each trial is an independent fit on its own seeded split. Trials run
//! sequentially or on a pool scoped to one call, and their outcomes always
//! come back in trial-index order.

pub mod outcome;
pub mod runner;

pub use outcome::TrialOutcome;
pub use runner::run_trials;
