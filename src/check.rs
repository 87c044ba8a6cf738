//! Check definitions and the seam checks plug into.

use serde::{Deserialize, Serialize};

use crate::outcome::CheckOutcome;
use crate::record::ResourceRecord;

/// Identity and human-readable description of a check.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Check {
    /// Stable identifier, the value users put in `kube-score/ignore`.
    pub id: String,
    pub name: String,
    pub comment: String,
    /// Kind of resource this check targets (e.g. `Pod`), empty for any.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub target_type: String,
    /// Optional checks only run when explicitly enabled by the caller.
    #[serde(default)]
    pub optional: bool,
}

impl Check {
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            comment: comment.into(),
            target_type: String::new(),
            optional: false,
        }
    }

    #[must_use]
    pub fn for_kind(mut self, kind: impl Into<String>) -> Self {
        self.target_type = kind.into();
        self
    }

    #[must_use]
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// True when the check applies to resources of `kind`.
    #[must_use]
    pub fn targets(&self, kind: &str) -> bool {
        self.target_type.is_empty() || self.target_type == kind
    }
}

/// An opaque evaluator. Given one resource it yields zero or more outcomes.
///
/// Implementors must be `Send + Sync` so the runner can fan them out across
/// records in parallel.
pub trait Checker: Send + Sync {
    fn check(&self) -> &Check;

    fn evaluate(&self, record: &ResourceRecord) -> Vec<CheckOutcome>;
}
