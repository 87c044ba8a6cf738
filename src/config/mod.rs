//! Loading of run configuration from `kube-score.toml`.

pub mod types;

pub use self::types::ScoreConfig;

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, ScoreError};
use crate::registry::Registry;

pub const CONFIG_FILE: &str = "kube-score.toml";

impl ScoreConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `kube-score.toml` from `dir`, falling back to defaults when absent.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        match fs::read_to_string(&path) {
            Ok(content) => {
                debug!(path = %path.display(), "loading config");
                Self::parse_toml(&content)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Self::default()),
            Err(source) => Err(ScoreError::Io { source, path }),
        }
    }

    /// # Errors
    /// Returns error on malformed TOML or mistyped fields.
    pub fn parse_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Empty registry carrying this config's run-wide suppressions.
    #[must_use]
    pub fn registry(&self) -> Registry {
        Registry::with_ignored_checks(self.ignore_checks.iter().cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grade::Grade;

    #[test]
    fn defaults() {
        let c = ScoreConfig::new();
        assert!(c.ignore_checks.is_empty());
        assert!(!c.exit_one_on_warning);
        assert!(c.parallel);
        assert_eq!(c.threshold(), Grade::Critical);
    }

    #[test]
    fn parse_partial_toml() {
        let c = ScoreConfig::parse_toml("exit_one_on_warning = true").unwrap();
        assert_eq!(c.threshold(), Grade::Warning);
        assert!(c.parallel);
    }

    #[test]
    fn parse_rejects_bad_types() {
        let err = ScoreConfig::parse_toml("parallel = \"yes\"").unwrap_err();
        assert!(matches!(err, ScoreError::Config(_)));
    }

    #[test]
    fn registry_carries_ignored_checks() {
        let c = ScoreConfig::parse_toml("ignore_checks = [\"a\", \"b\"]").unwrap();
        assert_eq!(c.registry().ignored_checks(), ["a".to_string(), "b".to_string()]);
    }
}
