use std::fmt;

/// Fields of the school form, in the order they are validated and submitted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Address,
    City,
    State,
    Contact,
    EmailId,
    Image,
}

impl Field {
    /// The text fields, in submission order.
    pub const TEXT: [Field; 6] = [
        Field::Name,
        Field::Address,
        Field::City,
        Field::State,
        Field::Contact,
        Field::EmailId,
    ];

    /// Name used for the input element and the multipart part.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Address => "address",
            Field::City => "city",
            Field::State => "state",
            Field::Contact => "contact",
            Field::EmailId => "email_id",
            Field::Image => "image",
        }
    }

    /// Label shown next to the input.
    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "School Name",
            Field::Address => "Address",
            Field::City => "City",
            Field::State => "State",
            Field::Contact => "Contact Number",
            Field::EmailId => "Email ID",
            Field::Image => "School Image",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// What the user has entered so far. Nothing here is checked yet.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchoolForm<F> {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    /// Every file currently selected in the image input.
    pub image: Vec<F>,
}

impl<F> Default for SchoolForm<F> {
    fn default() -> Self {
        Self {
            name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            contact: String::new(),
            email_id: String::new(),
            image: Vec::new(),
        }
    }
}

impl<F> SchoolForm<F> {
    /// Current value of a text field. `Field::Image` has no text value and yields `""`.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Address => &self.address,
            Field::City => &self.city,
            Field::State => &self.state,
            Field::Contact => &self.contact,
            Field::EmailId => &self.email_id,
            Field::Image => "",
        }
    }

    /// Overwrites a text field. Setting `Field::Image` is a no-op; use `image` directly.
    pub fn set_text(&mut self, field: Field, value: String) {
        match field {
            Field::Name => self.name = value,
            Field::Address => self.address = value,
            Field::City => self.city = value,
            Field::State => self.state = value,
            Field::Contact => self.contact = value,
            Field::EmailId => self.email_id = value,
            Field::Image => {}
        }
    }
}

/// A form that passed validation, holding exactly one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SchoolFormInput<F> {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub contact: String,
    pub email_id: String,
    pub image: F,
}

impl<F> SchoolFormInput<F> {
    /// Text fields paired with their keys, in submission order.
    pub fn text_fields(&self) -> [(Field, &str); 6] {
        [
            (Field::Name, self.name.as_str()),
            (Field::Address, self.address.as_str()),
            (Field::City, self.city.as_str()),
            (Field::State, self.state.as_str()),
            (Field::Contact, self.contact.as_str()),
            (Field::EmailId, self.email_id.as_str()),
        ]
    }
}
