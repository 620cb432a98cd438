//! StabilityEventHandler trait, all methods with no-op defaults.

use super::types::*;

/// Trait for observing multi-trial runs.
///
/// Handlers only override the events they care about. `Send + Sync` is
/// required because trials may complete on pool worker threads.
pub trait StabilityEventHandler: Send + Sync {
    fn on_run_started(&self, _event: &RunStartedEvent) {}
    fn on_trial_started(&self, _event: &TrialStartedEvent) {}
    fn on_trial_complete(&self, _event: &TrialCompleteEvent) {}
    fn on_trial_failed(&self, _event: &TrialFailedEvent) {}
    fn on_run_complete(&self, _event: &RunCompleteEvent) {}
}
