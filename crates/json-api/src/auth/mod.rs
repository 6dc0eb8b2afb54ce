//! Manager authentication

pub(crate) mod middleware;
