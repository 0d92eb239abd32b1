use crate::model::form::{Field, SchoolFormInput};

/// Value carried by one multipart part.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PartValue<F> {
    Text(String),
    File(F),
}

/// One named part of a multipart body.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Part<F> {
    pub name: &'static str,
    pub value: PartValue<F>,
}

/// Ordered description of a `multipart/form-data` body, independent of the browser's `FormData`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MultipartPayload<F> {
    parts: Vec<Part<F>>,
}

impl<F> MultipartPayload<F> {
    /// Encodes a validated form: the image under `image`, then every text field under its key.
    pub fn from_input(input: SchoolFormInput<F>) -> Self {
        let mut parts = Vec::with_capacity(7);
        let text: Vec<(Field, String)> = input
            .text_fields()
            .iter()
            .map(|(field, value)| (*field, value.to_string()))
            .collect();

        parts.push(Part {
            name: Field::Image.key(),
            value: PartValue::File(input.image),
        });
        for (field, value) in text {
            parts.push(Part {
                name: field.key(),
                value: PartValue::Text(value),
            });
        }

        Self { parts }
    }

    pub fn parts(&self) -> &[Part<F>] {
        &self.parts
    }

    /// Text parts as `(name, value)` pairs.
    pub fn text_fields(&self) -> Vec<(&'static str, &str)> {
        self.parts
            .iter()
            .filter_map(|part| match &part.value {
                PartValue::Text(value) => Some((part.name, value.as_str())),
                PartValue::File(_) => None,
            })
            .collect()
    }

    /// File parts as `(name, file)` pairs.
    pub fn file_fields(&self) -> Vec<(&'static str, &F)> {
        self.parts
            .iter()
            .filter_map(|part| match &part.value {
                PartValue::File(file) => Some((part.name, file)),
                PartValue::Text(_) => None,
            })
            .collect()
    }
}

/// A create call ready to be sent: one `POST` of `payload` to `url`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CreateSchoolRequest<F> {
    pub url: String,
    pub payload: MultipartPayload<F>,
}
