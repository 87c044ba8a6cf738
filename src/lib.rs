//! Aggregation and grading core for Kubernetes manifest analysis.
//!
//! Loaders register resources in a [`Registry`], checks append
//! [`CheckOutcome`]s to each [`ResourceRecord`], and renderers read the
//! per-resource [`Grade`] plus the fleet-wide pass/fail gate.

pub mod check;
pub mod config;
pub mod error;
pub mod exit;
pub mod grade;
pub mod outcome;
pub mod record;
pub mod registry;
pub mod resource;
pub mod runner;
pub mod summary;

pub use check::{Check, Checker};
pub use config::ScoreConfig;
pub use error::{Result, ScoreError};
pub use exit::ScoreExit;
pub use grade::{Grade, GradeStyle};
pub use outcome::{CheckOutcome, OutcomeComment};
pub use record::{ResourceRecord, IGNORED_CHECKS_ANNOTATION};
pub use registry::Registry;
pub use resource::{ObjectMeta, ResourceDescriptor, ResourceKey, TypeMeta};
pub use summary::Summary;
