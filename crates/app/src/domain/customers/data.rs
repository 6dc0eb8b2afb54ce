//! Customers Data

use std::fmt;

use crate::domain::customers::records::CustomerId;

/// Customer Save Data
///
/// When `id` names an existing customer only `name` and `phone` are written.
/// Otherwise a new customer is created with a fresh id and `password` is hashed.
#[derive(Clone, PartialEq)]
pub struct CustomerUpsert {
    /// Customer to update; `None` always creates.
    pub id: Option<CustomerId>,

    /// Display name.
    pub name: String,

    /// Phone number, also the login.
    pub phone: String,

    /// Plaintext password, hashed on create and ignored on update.
    pub password: String,
}

impl fmt::Debug for CustomerUpsert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerUpsert")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("password", &"**redacted**")
            .finish()
    }
}
