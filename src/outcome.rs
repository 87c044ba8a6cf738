//! Individual check verdicts and their informational comments.

use serde::Serialize;

use crate::check::Check;
use crate::grade::Grade;

/// Informational note attached to an outcome. Never affects grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeComment {
    /// Location inside the resource, e.g. `spec.containers[0].image`.
    pub path: String,
    pub summary: String,
    pub description: String,
}

/// One check's verdict on one resource.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckOutcome {
    check: Check,
    grade: Grade,
    /// Long-form remark shown by verbose renderers.
    #[serde(skip_serializing_if = "String::is_empty")]
    remark: String,
    comments: Vec<OutcomeComment>,
}

impl CheckOutcome {
    #[must_use]
    pub fn new(check: Check, grade: Grade) -> Self {
        Self {
            check,
            grade,
            remark: String::new(),
            comments: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_remark(mut self, remark: impl Into<String>) -> Self {
        self.remark = remark.into();
        self
    }

    /// Appends a comment. Paths are not validated; nothing touches disk.
    pub fn add_comment(
        &mut self,
        path: impl Into<String>,
        summary: impl Into<String>,
        description: impl Into<String>,
    ) {
        self.comments.push(OutcomeComment {
            path: path.into(),
            summary: summary.into(),
            description: description.into(),
        });
    }

    #[must_use]
    pub fn check(&self) -> &Check {
        &self.check
    }

    #[must_use]
    pub fn grade(&self) -> Grade {
        self.grade
    }

    #[must_use]
    pub fn remark(&self) -> &str {
        &self.remark
    }

    #[must_use]
    pub fn comments(&self) -> &[OutcomeComment] {
        &self.comments
    }

    pub(crate) fn set_check(&mut self, check: &Check) {
        if self.check != *check {
            self.check = check.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn outcome() -> CheckOutcome {
        CheckOutcome::new(Check::new("image-tag", "Image Tag", ""), Grade::Warning)
    }

    #[test]
    fn comments_keep_insertion_order() {
        let mut o = outcome();
        o.add_comment("spec.containers[0]", "first", "");
        o.add_comment("", "second", "no path is fine");
        let summaries: Vec<_> = o.comments().iter().map(|c| c.summary.as_str()).collect();
        assert_eq!(summaries, ["first", "second"]);
        assert_eq!(o.comments()[1].description, "no path is fine");
    }

    #[test]
    fn comments_do_not_change_grade() {
        let mut o = outcome();
        for i in 0..5 {
            o.add_comment(format!("p{i}"), "s", "d");
        }
        assert_eq!(o.grade(), Grade::Warning);
    }

    #[test]
    fn remark_defaults_empty() {
        assert_eq!(outcome().remark(), "");
        assert_eq!(outcome().with_remark("use a digest").remark(), "use a digest");
    }

    #[test]
    fn serializes_without_empty_remark() {
        let json = serde_json::to_value(outcome()).unwrap();
        assert!(json.get("remark").is_none());
        assert_eq!(json["grade"], "warning");
        assert_eq!(json["check"]["id"], "image-tag");
    }
}
