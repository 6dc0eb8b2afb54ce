//! Customer Records

use jiff::Timestamp;

use crate::ids::TypedId;

/// Customer Id
pub type CustomerId = TypedId<CustomerRecord>;

/// Customer Record
///
/// Read model only: the stored password hash is never loaded into it.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerRecord {
    /// Store-assigned identifier; immutable once assigned.
    pub id: CustomerId,

    /// Display name.
    pub name: String,

    /// Login handle used when issuing customer tokens.
    pub phone: String,

    /// Cleared while the customer is blocked.
    pub active: bool,

    /// Insertion timestamp.
    pub created: Timestamp,
}
