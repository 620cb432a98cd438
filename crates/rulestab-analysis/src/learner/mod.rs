//! The seam between stability analysis and the external rule learner.
//!
//! The analysis only needs three things from a learner: fit on a training
//! split, hand back its rule base, and predict labels for held-out rows.

pub mod dataset;
pub mod params;
pub mod split;
pub mod traits;

pub use dataset::Dataset;
pub use params::{FitParams, LearnerParams};
pub use split::train_test_split;
pub use traits::{LearnerFactory, RuleLearner};
