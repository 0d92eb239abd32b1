use std::collections::BTreeMap;

use thiserror::Error;

use crate::model::form::Field;

/// Why a single field was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("must be at least {min} characters")]
    TooShort { min: usize },
    #[error("does not match the expected format")]
    PatternMismatch,
    #[error("exactly one file must be selected")]
    MissingFile,
    #[error("file is larger than {max} bytes")]
    TooLarge { max: u64 },
    #[error("unsupported file type")]
    UnsupportedType,
}

impl ValidationError {
    /// The message shown under `field` in the form.
    pub fn message(&self, field: Field) -> &'static str {
        match (field, self) {
            (Field::Name, ValidationError::TooShort { .. }) => {
                "School name must be at least 3 characters"
            }
            (Field::Address, ValidationError::TooShort { .. }) => "Address is too short",
            (Field::City, ValidationError::TooShort { .. }) => "City name is required",
            (Field::State, ValidationError::TooShort { .. }) => "State name is required",
            (Field::Contact, _) => "Contact must be a 10-digit number",
            (Field::EmailId, _) => "Invalid email address",
            (_, ValidationError::MissingFile) => "School image is required.",
            (_, ValidationError::TooLarge { .. }) => "Max image size is 100KB.",
            (_, ValidationError::UnsupportedType) => {
                "Only .jpeg ,.jpg and .png formats are supported."
            }
            (_, ValidationError::TooShort { .. }) => "Value is too short",
            (_, ValidationError::PatternMismatch) => "Value has an invalid format",
        }
    }
}

/// Every failing rule, keyed by field. Fields that passed are absent.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<Field, Vec<ValidationError>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: Field, error: ValidationError) {
        self.0.entry(field).or_default().push(error);
    }

    /// Records the outcome of a single-rule check.
    pub fn record(&mut self, field: Field, result: Result<(), ValidationError>) {
        if let Err(error) = result {
            self.push(field, error);
        }
    }

    pub fn get(&self, field: Field) -> &[ValidationError] {
        self.0.get(&field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Inline message for `field`: the first rule it broke.
    pub fn first_message(&self, field: Field) -> Option<&'static str> {
        self.get(field).first().map(|error| error.message(field))
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }
}
