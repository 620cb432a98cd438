//! Structured span field names recorded after a span is opened.

/// Holdout accuracy of a single trial (0.0 - 1.0).
pub const TRIAL_ACCURACY: &str = "accuracy";

/// Wall-clock duration of one trial in milliseconds.
pub const TRIAL_DURATION_MS: &str = "duration_ms";
