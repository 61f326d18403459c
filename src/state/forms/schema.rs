//! Validation schema for the user form
//!
//! The schema is the single source of truth for field constraints. Every
//! function here is pure: it looks at a candidate and reports what is wrong
//! with it, nothing else.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use thiserror::Error;

/// Smallest accepted age
pub const MIN_AGE: i64 = 10;

/// Number of hobbies a valid submission selects
pub const REQUIRED_HOBBIES: usize = 2;

/// Fixed hobby enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hobby {
    Reading,
    Cooking,
    Running,
    Painting,
    Traveling,
}

impl Hobby {
    /// All hobbies in display order
    pub const ALL: [Hobby; 5] = [
        Hobby::Reading,
        Hobby::Cooking,
        Hobby::Running,
        Hobby::Painting,
        Hobby::Traveling,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Hobby::Reading => "reading",
            Hobby::Cooking => "cooking",
            Hobby::Running => "running",
            Hobby::Painting => "painting",
            Hobby::Traveling => "traveling",
        }
    }
}

impl fmt::Display for Hobby {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Names of the independently validated fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum FieldName {
    Name,
    Age,
    Hobbies,
}

impl FieldName {
    /// Fields in form order
    pub const ALL: [FieldName; 3] = [FieldName::Name, FieldName::Age, FieldName::Hobbies];

    pub fn as_str(&self) -> &'static str {
        match self {
            FieldName::Name => "name",
            FieldName::Age => "age",
            FieldName::Hobbies => "hobbies",
        }
    }

    /// Position of the field within the form
    pub fn index(&self) -> usize {
        match self {
            FieldName::Name => 0,
            FieldName::Age => 1,
            FieldName::Hobbies => 2,
        }
    }
}

/// A validated submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormData {
    pub name: String,
    pub age: i64,
    pub hobbies: Vec<Hobby>,
}

/// Raw, unvalidated field contents as the user typed them
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormValues {
    pub name: String,
    /// Age input buffer, parsed during validation
    pub age: String,
    pub hobbies: Vec<Hobby>,
}

impl From<&FormData> for FormValues {
    fn from(data: &FormData) -> Self {
        Self {
            name: data.name.clone(),
            age: data.age.to_string(),
            hobbies: data.hobbies.clone(),
        }
    }
}

/// Validation failure for a single field. `Display` is the message shown
/// next to the field.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Required")]
    Required,
    #[error("Expected number")]
    ExpectedNumber,
    #[error("Number must be greater than or equal to {min}")]
    TooSmall { min: i64 },
    #[error("select exactly {expected}")]
    WrongSelectionCount { expected: usize },
}

/// Per-field errors for a rejected submission
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<FieldName, FieldError>);

impl ValidationErrors {
    pub fn insert(&mut self, field: FieldName, error: FieldError) {
        self.0.insert(field, error);
    }

    pub fn get(&self, field: FieldName) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&FieldName, &FieldError)> {
        self.0.iter()
    }
}

pub fn validate_name(name: &str) -> Result<(), FieldError> {
    if name.is_empty() {
        return Err(FieldError::Required);
    }
    Ok(())
}

/// Parse the age input buffer
pub fn parse_age(input: &str) -> Result<i64, FieldError> {
    input
        .trim()
        .parse::<i64>()
        .map_err(|_| FieldError::ExpectedNumber)
}

pub fn validate_age(age: i64) -> Result<(), FieldError> {
    if age < MIN_AGE {
        return Err(FieldError::TooSmall { min: MIN_AGE });
    }
    Ok(())
}

/// Exactly [`REQUIRED_HOBBIES`] distinct hobbies must be selected
pub fn validate_hobbies(hobbies: &[Hobby]) -> Result<(), FieldError> {
    let mut distinct = hobbies.to_vec();
    distinct.sort();
    distinct.dedup();

    if hobbies.len() != REQUIRED_HOBBIES || distinct.len() != REQUIRED_HOBBIES {
        return Err(FieldError::WrongSelectionCount {
            expected: REQUIRED_HOBBIES,
        });
    }
    Ok(())
}

/// Inline validator for a single field
pub fn validate_field(values: &FormValues, field: FieldName) -> Result<(), FieldError> {
    match field {
        FieldName::Name => validate_name(&values.name),
        FieldName::Age => parse_age(&values.age).and_then(validate_age),
        FieldName::Hobbies => validate_hobbies(&values.hobbies),
    }
}

/// Validate the whole form, producing either the typed submission or every
/// field error at once.
pub fn validate(values: &FormValues) -> Result<FormData, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    if let Err(e) = validate_name(&values.name) {
        errors.insert(FieldName::Name, e);
    }

    let age = match parse_age(&values.age).and_then(|age| validate_age(age).map(|_| age)) {
        Ok(age) => Some(age),
        Err(e) => {
            errors.insert(FieldName::Age, e);
            None
        }
    };

    if let Err(e) = validate_hobbies(&values.hobbies) {
        errors.insert(FieldName::Hobbies, e);
    }

    match age {
        Some(age) if errors.is_empty() => Ok(FormData {
            name: values.name.clone(),
            age,
            hobbies: values.hobbies.clone(),
        }),
        _ => Err(errors),
    }
}
