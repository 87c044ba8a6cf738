//! Drives checkers over every registered resource.
//!
//! Checks are evaluated per record in checker order, so a record's outcome
//! list is identical whether the run is sequential or parallel. Parallel runs
//! hand each record to exactly one rayon task via `par_iter_mut`, which gives
//! the same guarantee as a per-record lock: `add` calls on one record are
//! serialized and different records never interfere.

use std::time::Instant;

use rayon::prelude::{IntoParallelRefMutIterator, ParallelIterator};
use tracing::debug;

use crate::check::Checker;
use crate::config::ScoreConfig;
use crate::record::ResourceRecord;
use crate::registry::Registry;

/// Which checkers run, given the caller's configuration.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    enabled_optional: Vec<String>,
}

impl Selection {
    #[must_use]
    pub fn from_config(config: &ScoreConfig) -> Self {
        Self {
            enabled_optional: config.enable_optional_checks.clone(),
        }
    }

    fn admits(&self, checker: &dyn Checker, record: &ResourceRecord) -> bool {
        let check = checker.check();
        if !check.targets(&record.type_meta().kind) {
            return false;
        }
        !check.optional || self.enabled_optional.iter().any(|id| *id == check.id)
    }
}

/// Runs every admitted checker against one record, appending its outcomes.
pub fn evaluate_record(
    record: &mut ResourceRecord,
    checkers: &[Box<dyn Checker>],
    selection: &Selection,
) {
    for checker in checkers {
        if !selection.admits(checker.as_ref(), record) {
            continue;
        }
        let check = checker.check();
        for outcome in checker.evaluate(record) {
            record.add(outcome, check);
        }
    }
}

pub fn run_sequential(
    registry: &mut Registry,
    checkers: &[Box<dyn Checker>],
    selection: &Selection,
) {
    let start = Instant::now();
    for record in registry.records_mut() {
        evaluate_record(record, checkers, selection);
    }
    debug!(
        resources = registry.len(),
        checkers = checkers.len(),
        elapsed = ?start.elapsed(),
        "sequential check run finished"
    );
}

pub fn run_parallel(
    registry: &mut Registry,
    checkers: &[Box<dyn Checker>],
    selection: &Selection,
) {
    let start = Instant::now();
    registry
        .records_mut()
        .par_iter_mut()
        .for_each(|record| evaluate_record(record, checkers, selection));
    debug!(
        resources = registry.len(),
        checkers = checkers.len(),
        elapsed = ?start.elapsed(),
        "parallel check run finished"
    );
}

/// Entry point: picks sequential or parallel execution from `config`.
pub fn run(registry: &mut Registry, checkers: &[Box<dyn Checker>], config: &ScoreConfig) {
    let selection = Selection::from_config(config);
    if config.parallel {
        run_parallel(registry, checkers, &selection);
    } else {
        run_sequential(registry, checkers, &selection);
    }
}
