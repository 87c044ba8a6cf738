//! Standardized process exit codes for scoring runs.
//!
//! Provides a stable contract for scripts and CI gates.

use std::process::Termination;

use tracing::error;

use crate::config::ScoreConfig;
use crate::registry::Registry;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ScoreExit {
    /// Every resource scored above the failure threshold.
    Success = 0,
    /// At least one outcome is at or below the failure threshold.
    CheckFailed = 1,
    /// Generic error (e.g. IO, config).
    Error = 2,
}

impl ScoreExit {
    #[must_use]
    pub fn code(self) -> i32 {
        self as i32
    }

    /// Derives the run's exit status from the fleet-wide grade gate.
    #[must_use]
    pub fn from_registry(registry: &Registry, config: &ScoreConfig) -> Self {
        if registry.any_at_or_below(config.threshold()) {
            Self::CheckFailed
        } else {
            Self::Success
        }
    }
}

impl Termination for ScoreExit {
    fn report(self) -> std::process::ExitCode {
        #[allow(clippy::cast_sign_loss, clippy::cast_possible_truncation)]
        std::process::ExitCode::from(self.code() as u8)
    }
}

impl<T> From<crate::error::Result<T>> for ScoreExit {
    fn from(res: crate::error::Result<T>) -> Self {
        match res {
            Ok(_) => Self::Success,
            Err(e) => {
                error!(error = %e, "scoring run failed");
                Self::Error
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Check;
    use crate::grade::Grade;
    use crate::outcome::CheckOutcome;
    use crate::resource::{ObjectMeta, TypeMeta};

    fn registry_with(grade: Grade) -> Registry {
        let mut registry = Registry::new();
        let check = Check::new("probe", "Probe", "test probe");
        registry
            .register_or_fetch(
                TypeMeta::new("Pod", "v1"),
                ObjectMeta::new("web", "default"),
            )
            .add(CheckOutcome::new(check.clone(), grade), &check);
        registry
    }

    #[test]
    fn codes_are_stable() {
        assert_eq!(ScoreExit::Success.code(), 0);
        assert_eq!(ScoreExit::CheckFailed.code(), 1);
        assert_eq!(ScoreExit::Error.code(), 2);
    }

    #[test]
    fn warning_passes_by_default() {
        let registry = registry_with(Grade::Warning);
        let config = ScoreConfig::default();
        assert_eq!(ScoreExit::from_registry(&registry, &config), ScoreExit::Success);
    }

    #[test]
    fn warning_fails_when_exit_one_on_warning() {
        let registry = registry_with(Grade::Warning);
        let config = ScoreConfig {
            exit_one_on_warning: true,
            ..ScoreConfig::default()
        };
        assert_eq!(
            ScoreExit::from_registry(&registry, &config),
            ScoreExit::CheckFailed
        );
    }

    #[test]
    fn critical_always_fails() {
        let registry = registry_with(Grade::Critical);
        let config = ScoreConfig::default();
        assert_eq!(
            ScoreExit::from_registry(&registry, &config),
            ScoreExit::CheckFailed
        );
    }

    #[test]
    fn error_result_maps_to_error_exit() {
        let res: crate::error::Result<Grade> = Grade::try_from(4);
        assert_eq!(ScoreExit::from(res), ScoreExit::Error);
    }
}
