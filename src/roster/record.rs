//! Validated student records
//!
//! Fields are private to force validation through the public API.

use super::error::ValidationError;

/// Minimum age (exclusive): a record must report an age strictly above this.
pub const MIN_AGE: i32 = 10;

/// Unvalidated field strings as read from an input source.
#[derive(Debug, Clone, PartialEq)]
pub struct RawStudent {
    pub name: String,
    pub age: String,
    pub score: String,
}

/// Validated student record (guaranteed non-empty name, age > 10, score > 0)
///
/// Fields are private to force validation through `new()`.
///
/// # Examples
/// ```
/// use campus_ledger::roster::StudentRecord;
///
/// let record = StudentRecord::new("Asha", 20, 81.5).unwrap();
/// assert_eq!(record.name(), "Asha");
///
/// let err = StudentRecord::new("Asha", 9, 81.5);
/// assert!(err.is_err()); // too young
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct StudentRecord {
    name: String,
    age: i32,
    score: f64,
}

impl StudentRecord {
    /// Create a new validated record.
    ///
    /// # Validation Rules
    /// - Name: non-empty after trimming
    /// - Age: strictly greater than 10
    /// - Score: strictly positive
    pub fn new(name: &str, age: i32, score: f64) -> Result<Self, ValidationError> {
        let name = name.trim();

        if name.is_empty() {
            return Err(ValidationError::EmptyName);
        }

        if age <= MIN_AGE {
            return Err(ValidationError::AgeTooSmall { min: MIN_AGE, got: age });
        }

        if score <= 0.0 {
            return Err(ValidationError::ScoreNotPositive { got: score });
        }

        Ok(Self {
            name: name.to_string(),
            age,
            score,
        })
    }

    /// Parse and validate raw input fields.
    pub fn parse(raw: &RawStudent) -> Result<Self, ValidationError> {
        let age: i32 = raw
            .age
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotNumeric {
                field: "age",
                got: raw.age.clone(),
            })?;

        let score: f64 = raw
            .score
            .trim()
            .parse()
            .map_err(|_| ValidationError::NotNumeric {
                field: "score",
                got: raw.score.clone(),
            })?;

        Self::new(&raw.name, age, score)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> i32 {
        self.age
    }

    pub fn score(&self) -> f64 {
        self.score
    }
}
