//! Subject record and its rating scales.
//!
//! Ratings are stored as the raw 1..=5 integers the forms submit. Out-of-range
//! values are kept as-is and label as `"Unknown"` rather than failing, so a
//! bad row never breaks page rendering.

#[cfg(test)]
#[path = "subject_test.rs"]
mod subject_test;

use serde::{Deserialize, Serialize};

const UNKNOWN_LABEL: &str = "Unknown";

/// Exam priority, 1 (highest) to 5 (lowest).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Priority(pub u8);

impl Priority {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Highest",
            2 => "High",
            3 => "Medium",
            4 => "Low",
            5 => "Lowest",
            _ => UNKNOWN_LABEL,
        }
    }
}

/// Material difficulty, 1 (very easy) to 5 (very hard).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Complexity(pub u8);

impl Complexity {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very Easy",
            2 => "Easy",
            3 => "Medium",
            4 => "Hard",
            5 => "Very Hard",
            _ => UNKNOWN_LABEL,
        }
    }
}

/// Self-reported stress or fatigue level, 1 (very low) to 5 (very high).
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Level(pub u8);

impl Level {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self.0 {
            1 => "Very Low",
            2 => "Low",
            3 => "Medium",
            4 => "High",
            5 => "Very High",
            _ => UNKNOWN_LABEL,
        }
    }
}

/// A subject the user is preparing an exam for.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Subject {
    pub id: i64,
    pub name: String,
    pub days_left: u32,
    pub total_units: u32,
    #[serde(default)]
    pub completed_units: u32,
    pub priority: Priority,
    pub complexity: Complexity,
}

impl Subject {
    /// Completed share of the syllabus in percent, rounded to one decimal.
    ///
    /// Exact halves round to even (`6.25` becomes `6.2`). Returns `0.0` when
    /// the subject has no units.
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        if self.total_units == 0 {
            return 0.0;
        }
        let percent = f64::from(self.completed_units) / f64::from(self.total_units) * 100.0;
        // `{:.1}` rounds the exact binary value with ties to even.
        format!("{percent:.1}").parse().unwrap_or(percent)
    }

    /// Inline `width` value for this subject's progress bar, e.g. `"12.5%"`.
    #[must_use]
    pub fn progress_width_style(&self) -> String {
        format!("{}%", self.progress_percent())
    }
}
