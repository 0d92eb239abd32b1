//! Validation schema for the school form.
//!
//! `validate` runs every field rule and either hands back a `SchoolFormInput` with exactly one
//! image or a `FieldErrors` map describing each rejected field. It is pure: the same form (and
//! the same file metadata) always gives the same answer.

mod errors;
mod rules;

pub use errors::{FieldErrors, ValidationError};
pub use rules::{
    validate_address, validate_city, validate_contact, validate_email, validate_image,
    validate_name, validate_state, ACCEPTED_IMAGE_TYPES, MAX_IMAGE_BYTES,
};

use crate::model::file::SelectedFile;
use crate::model::form::{Field, SchoolForm, SchoolFormInput};

/// Checks a single text field against its rule.
pub fn validate_text(field: Field, value: &str) -> Result<(), ValidationError> {
    match field {
        Field::Name => validate_name(value),
        Field::Address => validate_address(value),
        Field::City => validate_city(value),
        Field::State => validate_state(value),
        Field::Contact => validate_contact(value),
        Field::EmailId => validate_email(value),
        Field::Image => Ok(()),
    }
}

/// Validates the whole form.
pub fn validate<F>(form: &SchoolForm<F>) -> Result<SchoolFormInput<F>, FieldErrors>
where
    F: SelectedFile + Clone,
{
    let mut errors = FieldErrors::new();

    for field in Field::TEXT {
        errors.record(field, validate_text(field, form.text(field)));
    }
    for error in validate_image(&form.image) {
        errors.push(Field::Image, error);
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    match form.image.first() {
        Some(image) => Ok(SchoolFormInput {
            name: form.name.clone(),
            address: form.address.clone(),
            city: form.city.clone(),
            state: form.state.clone(),
            contact: form.contact.clone(),
            email_id: form.email_id.clone(),
            image: image.clone(),
        }),
        None => {
            errors.push(Field::Image, ValidationError::MissingFile);
            Err(errors)
        }
    }
}
