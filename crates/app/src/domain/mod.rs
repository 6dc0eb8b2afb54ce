//! Customers Domain Concerns

pub mod customers;
