//! Add/edit subject form validation.
//!
//! Fields arrive as the raw strings of a form submission. Validation checks
//! them in declaration order and reports the first failure, which is what the
//! page shows as its flash message.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use serde::Deserialize;

use crate::subject::{Complexity, Level, Priority, Subject};

const RATING_MIN: u32 = 1;
const RATING_MAX: u32 = 5;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("{field} is required")]
    Missing { field: &'static str },
    #[error("{field} must be a whole number")]
    NotANumber { field: &'static str },
    #[error("{field} must be at least {min}")]
    TooSmall { field: &'static str, min: u32 },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: &'static str, min: u32, max: u32 },
}

/// Raw subject form submission.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SubjectForm {
    pub name: String,
    pub days_left: String,
    pub total_units: String,
    pub priority: String,
    pub complexity: String,
    pub stress_level: String,
    pub fatigue_level: String,
}

/// A submission that passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidSubject {
    pub name: String,
    pub days_left: u32,
    pub total_units: u32,
    pub priority: Priority,
    pub complexity: Complexity,
    pub stress_level: Level,
    pub fatigue_level: Level,
}

impl SubjectForm {
    /// Validate every field, returning the first error encountered.
    ///
    /// # Errors
    ///
    /// Returns [`FormError`] when a field is empty, not numeric, or out of range.
    pub fn validate(&self) -> Result<ValidSubject, FormError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(FormError::Missing { field: "name" });
        }
        let days_left = parse_at_least("days_left", &self.days_left, 1)?;
        let total_units = parse_at_least("total_units", &self.total_units, 1)?;
        let priority = parse_rating("priority", &self.priority)?;
        let complexity = parse_rating("complexity", &self.complexity)?;
        let stress_level = parse_rating("stress_level", &self.stress_level)?;
        let fatigue_level = parse_rating("fatigue_level", &self.fatigue_level)?;

        Ok(ValidSubject {
            name: name.to_owned(),
            days_left,
            total_units,
            priority: Priority(priority),
            complexity: Complexity(complexity),
            stress_level: Level(stress_level),
            fatigue_level: Level(fatigue_level),
        })
    }
}

impl ValidSubject {
    /// Build the stored subject record; progress starts at zero.
    #[must_use]
    pub fn into_subject(self, id: i64) -> Subject {
        Subject {
            id,
            name: self.name,
            days_left: self.days_left,
            total_units: self.total_units,
            completed_units: 0,
            priority: self.priority,
            complexity: self.complexity,
        }
    }
}

fn parse_number(field: &'static str, raw: &str) -> Result<u32, FormError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(FormError::Missing { field });
    }
    raw.parse::<u32>()
        .map_err(|_| FormError::NotANumber { field })
}

fn parse_at_least(field: &'static str, raw: &str, min: u32) -> Result<u32, FormError> {
    let value = parse_number(field, raw)?;
    if value < min {
        return Err(FormError::TooSmall { field, min });
    }
    Ok(value)
}

fn parse_rating(field: &'static str, raw: &str) -> Result<u8, FormError> {
    let value = parse_number(field, raw)?;
    if !(RATING_MIN..=RATING_MAX).contains(&value) {
        return Err(FormError::OutOfRange { field, min: RATING_MIN, max: RATING_MAX });
    }
    u8::try_from(value).map_err(|_| FormError::OutOfRange { field, min: RATING_MIN, max: RATING_MAX })
}
