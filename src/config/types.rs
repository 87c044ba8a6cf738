//! Serde shape of `kube-score.toml`.

use serde::{Deserialize, Serialize};

use crate::grade::Grade;

/// Contents of `kube-score.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Check IDs suppressed on every resource.
    #[serde(default)]
    pub ignore_checks: Vec<String>,
    /// Optional checks to run.
    #[serde(default)]
    pub enable_optional_checks: Vec<String>,
    /// Fail the run on `WARNING` outcomes, not only `CRITICAL` ones.
    #[serde(default)]
    pub exit_one_on_warning: bool,
    #[serde(default = "default_parallel")]
    pub parallel: bool,
}

impl Default for ScoreConfig {
    fn default() -> Self {
        Self {
            ignore_checks: Vec::new(),
            enable_optional_checks: Vec::new(),
            exit_one_on_warning: false,
            parallel: default_parallel(),
        }
    }
}

const fn default_parallel() -> bool {
    true
}

impl ScoreConfig {
    /// Grade at or below which the run counts as failed.
    #[must_use]
    pub fn threshold(&self) -> Grade {
        if self.exit_one_on_warning {
            Grade::Warning
        } else {
            Grade::Critical
        }
    }
}
