//! Token Handlers

pub(crate) mod issue;
pub(crate) mod validate;
