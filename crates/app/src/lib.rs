//! Customer records, credentials, and bearer tokens backed by `PostgreSQL`.

pub mod auth;
pub mod context;
pub mod database;
pub mod domain;
pub mod ids;

#[cfg(test)]
mod test;
