//! Fleet-wide tallies for renderers.

use serde::Serialize;

use crate::grade::Grade;
use crate::record::ResourceRecord;

/// Fleet-wide tally of resources by derived grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Summary {
    pub resources: usize,
    pub outcomes: usize,
    pub critical: usize,
    pub warning: usize,
    pub almost_ok: usize,
    pub all_ok: usize,
    /// Worst resource grade, `AllOk` when there are no resources.
    pub grade: Grade,
}

impl Default for Summary {
    fn default() -> Self {
        Self {
            resources: 0,
            outcomes: 0,
            critical: 0,
            warning: 0,
            almost_ok: 0,
            all_ok: 0,
            grade: Grade::AllOk,
        }
    }
}

impl Summary {
    #[must_use]
    pub fn from_records(records: &[ResourceRecord]) -> Self {
        let mut summary = Self::default();
        for record in records {
            summary.ingest(record);
        }
        summary
    }

    fn ingest(&mut self, record: &ResourceRecord) {
        let grade = record.grade();
        self.resources += 1;
        self.outcomes += record.outcomes().len();
        *self.slot(grade) += 1;
        self.grade = self.grade.min(grade);
    }

    fn slot(&mut self, grade: Grade) -> &mut usize {
        match grade {
            Grade::Critical => &mut self.critical,
            Grade::Warning => &mut self.warning,
            Grade::AlmostOk => &mut self.almost_ok,
            Grade::AllOk => &mut self.all_ok,
        }
    }

    /// Number of resources whose derived grade is exactly `grade`.
    #[must_use]
    pub fn count(&self, grade: Grade) -> usize {
        match grade {
            Grade::Critical => self.critical,
            Grade::Warning => self.warning,
            Grade::AlmostOk => self.almost_ok,
            Grade::AllOk => self.all_ok,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::check::Check;
    use crate::outcome::CheckOutcome;
    use crate::resource::{ObjectMeta, TypeMeta};

    fn record(name: &str, grades: &[Grade]) -> ResourceRecord {
        let mut r = ResourceRecord::new(TypeMeta::new("Pod", "v1"), ObjectMeta::new(name, ""));
        for (i, grade) in grades.iter().enumerate() {
            let c = Check::new(format!("c{i}"), "", "");
            r.add(CheckOutcome::new(c.clone(), *grade), &c);
        }
        r
    }

    #[test]
    fn empty_summary() {
        let s = Summary::from_records(&[]);
        assert_eq!(s, Summary::default());
        assert_eq!(s.grade, Grade::AllOk);
    }

    #[test]
    fn counts_by_derived_grade() {
        let records = [
            record("a", &[Grade::AllOk, Grade::Critical]),
            record("b", &[Grade::AlmostOk]),
            record("c", &[]),
            record("d", &[Grade::Warning, Grade::AlmostOk]),
        ];
        let s = Summary::from_records(&records);
        assert_eq!(s.resources, 4);
        assert_eq!(s.outcomes, 5);
        assert_eq!(s.count(Grade::Critical), 1);
        assert_eq!(s.count(Grade::Warning), 1);
        assert_eq!(s.count(Grade::AlmostOk), 1);
        assert_eq!(s.count(Grade::AllOk), 1);
        assert_eq!(s.grade, Grade::Critical);
    }

    #[test]
    fn serializes_for_renderers() {
        let s = Summary::from_records(&[record("a", &[Grade::Warning])]);
        let json = serde_json::to_value(s).unwrap();
        assert_eq!(json["warning"], 1);
        assert_eq!(json["grade"], "warning");
    }
}
