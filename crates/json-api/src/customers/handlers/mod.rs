//! Customer Handlers

pub(crate) mod active;
pub(crate) mod block;
pub(crate) mod delete;
pub(crate) mod get;
pub(crate) mod index;
pub(crate) mod save;
pub(crate) mod unblock;
