use serde::{Deserialize, Serialize};
use std::fmt;

pub const NAME_CAPACITY: usize = 100;
pub const PHONE_CAPACITY: usize = 20;
pub const EMAIL_CAPACITY: usize = 100;
pub const ADDRESS_CAPACITY: usize = 200;

/// The four text fields of a contact, in on-disk order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    Phone,
    Email,
    Address,
}

impl Field {
    pub const ALL: [Field; 4] = [Field::Name, Field::Phone, Field::Email, Field::Address];

    /// Bytes reserved for this field in a record, including the NUL terminator.
    pub fn capacity(self) -> usize {
        match self {
            Field::Name => NAME_CAPACITY,
            Field::Phone => PHONE_CAPACITY,
            Field::Email => EMAIL_CAPACITY,
            Field::Address => ADDRESS_CAPACITY,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Phone => "phone",
            Field::Email => "email",
            Field::Address => "address",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Cuts `value` so it fits in a field of `capacity` bytes with room for the
/// NUL terminator. Never splits a UTF-8 character; anything after an embedded
/// NUL is dropped since it could not be read back.
pub fn truncate_field(value: &str, capacity: usize) -> String {
    let value = value.split('\0').next().unwrap_or_default();
    let max = capacity.saturating_sub(1);
    if value.len() <= max {
        return value.to_string();
    }

    let mut end = max;
    while !value.is_char_boundary(end) {
        end -= 1;
    }
    value[..end].to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: u32,
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl Contact {
    /// Builds a stored contact from user input, truncating each field to capacity.
    pub fn new(id: u32, draft: ContactDraft) -> Self {
        Self {
            id,
            name: truncate_field(&draft.name, NAME_CAPACITY),
            phone: truncate_field(&draft.phone, PHONE_CAPACITY),
            email: truncate_field(&draft.email, EMAIL_CAPACITY),
            address: truncate_field(&draft.address, ADDRESS_CAPACITY),
        }
    }

    pub fn field(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Address => &self.address,
        }
    }

    pub fn set_field(&mut self, field: Field, value: &str) {
        let value = truncate_field(value, field.capacity());
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Address => self.address = value,
        }
    }
}

/// User-supplied fields for a new contact. The id is assigned by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactDraft {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactDraft {
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
        }
    }
}

/// Partial update for an existing contact.
///
/// A blank value (empty or whitespace only) means "keep the current value".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactUpdate {
    pub name: String,
    pub phone: String,
    pub email: String,
    pub address: String,
}

impl ContactUpdate {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Phone => &self.phone,
            Field::Email => &self.email,
            Field::Address => &self.address,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Phone => self.phone = value,
            Field::Email => self.email = value,
            Field::Address => self.address = value,
        }
    }

    pub fn with(mut self, field: Field, value: impl Into<String>) -> Self {
        self.set(field, value);
        self
    }

    pub fn is_blank(&self) -> bool {
        Field::ALL.iter().all(|f| self.value(*f).trim().is_empty())
    }
}
