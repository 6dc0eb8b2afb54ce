//! Auth data models.

use jiff::Timestamp;

use crate::{domain::customers::records::CustomerId, ids::TypedId};

/// Manager Id
pub type ManagerId = TypedId<ManagerRecord>;

/// Internal operator account, authenticated with basic auth.
#[derive(Debug, Clone, PartialEq)]
pub struct ManagerRecord {
    /// Store-assigned identifier.
    pub id: ManagerId,

    /// Basic-auth user name.
    pub login: String,

    /// Insertion timestamp.
    pub created: Timestamp,
}

/// Login material for a customer, looked up by phone.
#[derive(Clone)]
pub(crate) struct CustomerCredential {
    pub customer_id: CustomerId,

    /// PHC-formatted salted hash.
    pub password_hash: String,
}

/// Stored token row together with the database clock at lookup time.
#[derive(Debug, Clone)]
pub(crate) struct StoredCustomerToken {
    pub customer_id: CustomerId,
    pub created: Timestamp,
    pub checked_at: Timestamp,
}
