//! Single-field rules. Each returns the first (and only) error for its field, except the image
//! rule, which reports every failing check.

use lazy_static::lazy_static;
use regex::Regex;

use super::errors::ValidationError;
use crate::model::file::SelectedFile;

/// Largest accepted image, in bytes.
pub const MAX_IMAGE_BYTES: u64 = 100_000;

/// MIME types accepted for the school image.
pub const ACCEPTED_IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/jpg"];

lazy_static! {
    static ref CONTACT_RE: Regex = Regex::new(r"^[0-9]{10}$").unwrap();
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap();
}

fn min_chars(value: &str, min: usize) -> Result<(), ValidationError> {
    if value.chars().count() < min {
        Err(ValidationError::TooShort { min })
    } else {
        Ok(())
    }
}

pub fn validate_name(value: &str) -> Result<(), ValidationError> {
    min_chars(value, 3)
}

pub fn validate_address(value: &str) -> Result<(), ValidationError> {
    min_chars(value, 5)
}

pub fn validate_city(value: &str) -> Result<(), ValidationError> {
    min_chars(value, 2)
}

pub fn validate_state(value: &str) -> Result<(), ValidationError> {
    min_chars(value, 2)
}

/// Exactly ten ASCII digits: no spaces, dashes or country code.
pub fn validate_contact(value: &str) -> Result<(), ValidationError> {
    if CONTACT_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::PatternMismatch)
    }
}

pub fn validate_email(value: &str) -> Result<(), ValidationError> {
    if EMAIL_RE.is_match(value) {
        Ok(())
    } else {
        Err(ValidationError::PatternMismatch)
    }
}

/// Checks the selected files. The count, size and type checks are independent; size and type
/// look at the first file when there is one.
pub fn validate_image<F: SelectedFile>(files: &[F]) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if files.len() != 1 {
        errors.push(ValidationError::MissingFile);
    }

    if let Some(file) = files.first() {
        if file.size() > MAX_IMAGE_BYTES {
            errors.push(ValidationError::TooLarge {
                max: MAX_IMAGE_BYTES,
            });
        }
        if !ACCEPTED_IMAGE_TYPES.contains(&file.mime_type().as_str()) {
            errors.push(ValidationError::UnsupportedType);
        }
    }

    errors
}
