//! Per-resource accumulator of check outcomes.

use std::collections::{BTreeSet, HashSet};

use serde::Serialize;
use tracing::trace;

use crate::check::Check;
use crate::grade::Grade;
use crate::outcome::CheckOutcome;
use crate::resource::{ObjectMeta, ResourceKey, TypeMeta};

/// Annotation listing check IDs to skip for a resource, comma separated.
pub const IGNORED_CHECKS_ANNOTATION: &str = "kube-score/ignore";

/// Identity, suppressions and recorded outcomes of one resource.
#[derive(Debug, Clone, Serialize)]
pub struct ResourceRecord {
    type_meta: TypeMeta,
    object_meta: ObjectMeta,
    #[serde(skip)]
    suppressed: HashSet<String>,
    outcomes: Vec<CheckOutcome>,
}

impl ResourceRecord {
    /// Builds a record, reading suppressions from the metadata annotations.
    #[must_use]
    pub fn new(type_meta: TypeMeta, object_meta: ObjectMeta) -> Self {
        let suppressed = object_meta
            .annotations
            .get(IGNORED_CHECKS_ANNOTATION)
            .map(String::as_str)
            .map(parse_ignored)
            .unwrap_or_default();

        Self {
            type_meta,
            object_meta,
            suppressed,
            outcomes: Vec::new(),
        }
    }

    /// Adds run-wide suppressions on top of the annotation ones.
    pub(crate) fn suppress<I, S>(&mut self, ids: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for id in ids {
            let id = id.as_ref().trim();
            if !id.is_empty() {
                self.suppressed.insert(id.to_string());
            }
        }
    }

    /// Records `outcome` as the result of `check`, unless the check is suppressed.
    pub fn add(&mut self, mut outcome: CheckOutcome, check: &Check) {
        if self.suppressed.contains(&check.id) {
            trace!(resource = %self.key(), check = %check.id, "outcome suppressed");
            return;
        }
        outcome.set_check(check);
        self.outcomes.push(outcome);
    }

    /// Worst grade among recorded outcomes; `AllOk` when nothing was recorded.
    #[must_use]
    pub fn grade(&self) -> Grade {
        self.outcomes
            .iter()
            .map(CheckOutcome::grade)
            .min()
            .unwrap_or(Grade::AllOk)
    }

    /// True if any single outcome is at or below `threshold`.
    #[must_use]
    pub fn any_at_or_below(&self, threshold: Grade) -> bool {
        self.outcomes
            .iter()
            .any(|o| o.grade().is_at_or_below(threshold))
    }

    /// `<name>[/<namespace>] <api-version>/<kind>`, for display only.
    #[must_use]
    pub fn human_friendly_ref(&self) -> String {
        let mut s = self.object_meta.name.clone();
        if !self.object_meta.namespace.is_empty() {
            s.push('/');
            s.push_str(&self.object_meta.namespace);
        }
        s.push(' ');
        s.push_str(&self.type_meta.api_version);
        s.push('/');
        s.push_str(&self.type_meta.kind);
        s
    }

    #[must_use]
    pub fn key(&self) -> ResourceKey {
        ResourceKey::new(&self.type_meta, &self.object_meta)
    }

    #[must_use]
    pub fn type_meta(&self) -> &TypeMeta {
        &self.type_meta
    }

    #[must_use]
    pub fn object_meta(&self) -> &ObjectMeta {
        &self.object_meta
    }

    #[must_use]
    pub fn outcomes(&self) -> &[CheckOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub fn is_suppressed(&self, check_id: &str) -> bool {
        self.suppressed.contains(check_id)
    }

    /// Suppressed check IDs, sorted.
    #[must_use]
    pub fn suppressed(&self) -> BTreeSet<&str> {
        self.suppressed.iter().map(String::as_str).collect()
    }
}

fn parse_ignored(csv: &str) -> HashSet<String> {
    csv.split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
        .collect()
}
