//! The ordered health scale every check outcome is graded on.
//!
//! Grading logic only ever compares [`Grade`] values. Presentation metadata
//! (label, glyph, terminal color) lives behind [`Grade::style`] so renderers
//! share one source of truth without the ordering code depending on it.

use std::fmt;

use colored::Color;
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScoreError};

/// Health of an outcome or a resource. Lower is worse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
#[repr(u8)]
pub enum Grade {
    /// The resource is broken or dangerous as written.
    Critical = 1,
    /// Likely problem that deserves a fix.
    Warning = 5,
    /// Acceptable, with room for improvement.
    AlmostOk = 7,
    /// Nothing to report.
    #[serde(alias = "ok")]
    AllOk = 10,
}

/// Display triple attached to each grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GradeStyle {
    pub label: &'static str,
    pub glyph: &'static str,
    pub color: Color,
}

const CRITICAL_STYLE: GradeStyle = GradeStyle {
    label: "CRITICAL",
    glyph: "💥",
    color: Color::Red,
};
const WARNING_STYLE: GradeStyle = GradeStyle {
    label: "WARNING",
    glyph: "⚠️",
    color: Color::Yellow,
};
const ALMOST_OK_STYLE: GradeStyle = GradeStyle {
    label: "~ OK",
    glyph: "🔊",
    color: Color::Yellow,
};
const ALL_OK_STYLE: GradeStyle = GradeStyle {
    label: "OK",
    glyph: "💚",
    color: Color::Green,
};

impl Grade {
    /// All grades, worst first.
    pub const ALL: [Grade; 4] = [Self::Critical, Self::Warning, Self::AlmostOk, Self::AllOk];

    /// Numeric ordinal (1, 5, 7 or 10).
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Converts an ordinal produced by this crate back into a grade.
    ///
    /// # Panics
    /// Panics on any value outside the scale. Such a value can only come from
    /// an internal defect; use [`Grade::try_from`] for untrusted input.
    #[must_use]
    pub fn from_value(value: u8) -> Self {
        match Self::try_from(value) {
            Ok(grade) => grade,
            Err(_) => panic!("unknown grade value {value}"),
        }
    }

    /// True when `self` is as bad as `threshold` or worse.
    #[must_use]
    pub fn is_at_or_below(self, threshold: Grade) -> bool {
        self <= threshold
    }

    #[must_use]
    pub const fn style(self) -> GradeStyle {
        match self {
            Self::Critical => CRITICAL_STYLE,
            Self::Warning => WARNING_STYLE,
            Self::AlmostOk => ALMOST_OK_STYLE,
            Self::AllOk => ALL_OK_STYLE,
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        self.style().label
    }

    #[must_use]
    pub const fn glyph(self) -> &'static str {
        self.style().glyph
    }

    /// Terminal color hint for renderers using `colored`.
    #[must_use]
    pub const fn color(self) -> Color {
        self.style().color
    }
}

impl TryFrom<u8> for Grade {
    type Error = ScoreError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            1 => Ok(Self::Critical),
            5 => Ok(Self::Warning),
            7 => Ok(Self::AlmostOk),
            10 => Ok(Self::AllOk),
            other => Err(ScoreError::InvalidGrade(other)),
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
