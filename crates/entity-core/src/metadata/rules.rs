//! Validation rules carried by field metadata.

use chrono::NaiveDate;
use regex::Regex;

/// Rules for the string field kinds.
#[derive(Debug, Clone, Default)]
pub struct StringRules {
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub pattern: Option<Regex>,
}

impl StringRules {
    /// Validate a string value against the rules.
    ///
    /// Lengths count Unicode scalar values, not bytes.
    pub fn check(&self, value: &str, label: &str) -> Result<(), String> {
        let length = value.chars().count();

        if let Some(min) = self.min_length {
            if length < min {
                return Err(format!("{label} must contain at least {min} characters"));
            }
        }

        if let Some(max) = self.max_length {
            if length > max {
                return Err(format!("{label} must not exceed {max} characters"));
            }
        }

        if let Some(pattern) = &self.pattern {
            if !pattern.is_match(value) {
                return Err(format!("{label} has an invalid format"));
            }
        }

        Ok(())
    }
}

/// Rules for numeric fields.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NumberRules {
    pub min: Option<f64>,
    pub max: Option<f64>,
}

impl NumberRules {
    /// Validate a numeric value against the min/max bounds.
    ///
    /// Values exactly at a bound pass.
    pub fn check(&self, value: f64, label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{label} must be at least {min}"));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{label} must not exceed {max}"));
            }
        }

        Ok(())
    }
}

/// Rules for date fields. Bounds are inclusive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DateRules {
    pub min: Option<NaiveDate>,
    pub max: Option<NaiveDate>,
}

impl DateRules {
    pub fn check(&self, value: NaiveDate, label: &str) -> Result<(), String> {
        if let Some(min) = self.min {
            if value < min {
                return Err(format!("{label} must not be before {min}"));
            }
        }

        if let Some(max) = self.max {
            if value > max {
                return Err(format!("{label} must not be after {max}"));
            }
        }

        Ok(())
    }
}
