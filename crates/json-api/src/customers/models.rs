//! Customer Models

use std::fmt;

use salvo::oapi::ToSchema;
use serde::{Deserialize, Serialize};

use customers_app::domain::customers::{
    data::CustomerUpsert,
    records::{CustomerId, CustomerRecord},
};

/// Customer as returned to callers. There is no password field.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerResponse {
    /// Store-assigned identifier
    pub id: i64,

    pub name: String,

    /// Phone number, also the customer's login
    pub phone: String,

    /// Blocked customers are inactive
    pub active: bool,

    /// RFC 3339 creation timestamp
    pub created: String,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(customer: CustomerRecord) -> Self {
        CustomerResponse {
            id: customer.id.into_i64(),
            name: customer.name,
            phone: customer.phone,
            active: customer.active,
            created: customer.created.to_string(),
        }
    }
}

/// Save Customer Request
///
/// An `id` naming an existing customer updates its name and phone; any other
/// `id` (or none) creates a new customer.
#[derive(Serialize, Deserialize, ToSchema)]
pub(crate) struct CustomerRequest {
    #[serde(default)]
    pub id: Option<i64>,

    pub name: String,

    pub phone: String,

    /// Only used when creating; never returned.
    #[serde(default)]
    pub password: String,
}

impl fmt::Debug for CustomerRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CustomerRequest")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("phone", &self.phone)
            .field("password", &"**redacted**")
            .finish()
    }
}

impl From<CustomerRequest> for CustomerUpsert {
    fn from(request: CustomerRequest) -> Self {
        CustomerUpsert {
            id: request.id.map(CustomerId::from_i64),
            name: request.name,
            phone: request.phone,
            password: request.password,
        }
    }
}
