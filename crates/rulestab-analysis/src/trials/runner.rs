//! Trial runner: split, fit, snapshot, evaluate.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use rayon::prelude::*;
use rulestab_core::config::TrialConfig;
use rulestab_core::errors::{TrainingError, TrialError};
use rulestab_core::events::{
    EventDispatcher, RunCompleteEvent, RunStartedEvent, TrialCompleteEvent, TrialFailedEvent,
    TrialStartedEvent,
};
use rulestab_core::tracing::fields;
use statrs::statistics::Statistics;
use tracing::field::Empty;
use tracing::{debug, debug_span, info, info_span, warn, Span};

use super::TrialOutcome;
use crate::learner::{train_test_split, Dataset, FitParams, LearnerFactory, LearnerParams, RuleLearner};

/// Run `trials.count` independent trials and return their outcomes in
/// trial-index order.
///
/// Trial `ix` splits with seed `ix` and fits with `random_seed = Some(ix)`,
/// so a run is reproducible for a deterministic learner. Any failing trial
/// aborts the run. With parallel trials, trials above the lowest failing
/// index are not started once that failure is known, and the lowest failing
/// index is reported.
pub fn run_trials<F: LearnerFactory>(
    dataset: &Dataset,
    trials: &TrialConfig,
    learner: &LearnerParams,
    fit: &FitParams,
    factory: &F,
    events: &EventDispatcher,
) -> Result<Vec<TrialOutcome>, TrialError> {
    let n = trials.effective_count();
    let parallelism = trials.effective_parallelism();

    let span = info_span!("rulestab.trials", trials = n, parallelism);
    let _guard = span.enter();

    events.emit_run_started(&RunStartedEvent {
        trials: n,
        parallelism,
    });
    let started = Instant::now();

    let ctx = TrialContext {
        dataset,
        test_fraction: trials.effective_test_fraction(),
        learner,
        fit,
        factory,
        events,
        span: &span,
    };

    let outcomes = if parallelism > 1 {
        match rayon::ThreadPoolBuilder::new().num_threads(parallelism).build() {
            // The pool is dropped, and its workers joined, when this arm ends.
            Ok(pool) => pool.install(|| ctx.run_parallel(n))?,
            Err(e) => {
                warn!(error = %e, "could not build trial pool; running sequentially");
                ctx.run_sequential(n)?
            }
        }
    } else {
        ctx.run_sequential(n)?
    };

    let duration_ms = started.elapsed().as_millis() as u64;
    let mean_accuracy = outcomes.iter().map(|o| o.accuracy).mean();
    info!(trials = n, mean_accuracy, duration_ms, "trials complete");
    events.emit_run_complete(&RunCompleteEvent {
        trials: n,
        mean_accuracy,
        duration_ms,
    });

    Ok(outcomes)
}

/// Everything a single trial reads, shared by every worker.
struct TrialContext<'a, F> {
    dataset: &'a Dataset,
    test_fraction: f64,
    learner: &'a LearnerParams,
    fit: &'a FitParams,
    factory: &'a F,
    events: &'a EventDispatcher,
    span: &'a Span,
}

impl<F: LearnerFactory> TrialContext<'_, F> {
    fn run_sequential(&self, n: usize) -> Result<Vec<TrialOutcome>, TrialError> {
        (0..n).map(|ix| self.run_trial(ix)).collect()
    }

    fn run_parallel(&self, n: usize) -> Result<Vec<TrialOutcome>, TrialError> {
        let lowest_failed = AtomicUsize::new(usize::MAX);

        let results: Vec<Option<Result<TrialOutcome, TrialError>>> = (0..n)
            .into_par_iter()
            .map(|ix| {
                if ix > lowest_failed.load(Ordering::SeqCst) {
                    debug!(trial = ix, "skipped after an earlier trial failed");
                    return None;
                }
                let result = self.run_trial(ix);
                if result.is_err() {
                    lowest_failed.fetch_min(ix, Ordering::SeqCst);
                }
                Some(result)
            })
            .collect();

        // Skipped trials all sit above the lowest failure, so the first error
        // in index order is the one reported.
        results.into_iter().flatten().collect()
    }

    fn run_trial(&self, ix: usize) -> Result<TrialOutcome, TrialError> {
        let span = debug_span!(
            parent: self.span,
            "rulestab.trial",
            trial = ix,
            accuracy = Empty,
            duration_ms = Empty
        );
        let _guard = span.enter();

        self.events.emit_trial_started(&TrialStartedEvent { index: ix });
        let started = Instant::now();

        let result = self.fit_and_evaluate(ix);
        let duration_ms = started.elapsed().as_millis() as u64;
        span.record(fields::TRIAL_DURATION_MS, duration_ms);

        match result {
            Ok(outcome) => {
                span.record(fields::TRIAL_ACCURACY, outcome.accuracy);
                debug!(rules = outcome.rule_base.n_rules(), "trial complete");
                self.events.emit_trial_complete(&TrialCompleteEvent {
                    index: ix,
                    accuracy: outcome.accuracy,
                    rules: outcome.rule_base.n_rules(),
                    duration_ms,
                });
                Ok(outcome)
            }
            Err(e) => {
                warn!(trial = ix, error = %e, "trial failed");
                self.events.emit_trial_failed(&TrialFailedEvent {
                    index: ix,
                    message: e.to_string(),
                });
                Err(TrialError::new(ix, e))
            }
        }
    }

    fn fit_and_evaluate(&self, ix: usize) -> Result<TrialOutcome, TrainingError> {
        let seed = ix as u64;
        let (train, test) = train_test_split(self.dataset, self.test_fraction, seed)?;

        let mut learner = self.factory.build(self.learner);
        learner.fit(&train, &self.fit.with_seed(seed))?;
        let rule_base = learner.rule_base();

        let predicted = learner.forward(test.features());
        if predicted.len() != test.len() {
            return Err(TrainingError::PredictionLengthMismatch {
                expected: test.len(),
                predicted: predicted.len(),
            });
        }
        let matches = predicted
            .iter()
            .zip(test.labels())
            .filter(|(p, y)| p == y)
            .count();

        Ok(TrialOutcome {
            index: ix,
            rule_base,
            accuracy: matches as f64 / test.len() as f64,
        })
    }
}
