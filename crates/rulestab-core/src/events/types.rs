//! Event payload types.

/// Payload for `on_run_started`.
#[derive(Debug, Clone)]
pub struct RunStartedEvent {
    pub trials: usize,
    pub parallelism: usize,
}

/// Payload for `on_trial_started`.
#[derive(Debug, Clone)]
pub struct TrialStartedEvent {
    pub index: usize,
}

/// Payload for `on_trial_complete`.
#[derive(Debug, Clone)]
pub struct TrialCompleteEvent {
    pub index: usize,
    pub accuracy: f64,
    /// Rules learned across all classes.
    pub rules: usize,
    pub duration_ms: u64,
}

/// Payload for `on_trial_failed`.
#[derive(Debug, Clone)]
pub struct TrialFailedEvent {
    pub index: usize,
    pub message: String,
}

/// Payload for `on_run_complete`.
#[derive(Debug, Clone)]
pub struct RunCompleteEvent {
    pub trials: usize,
    /// NaN when no trial ran.
    pub mean_accuracy: f64,
    pub duration_ms: u64,
}
