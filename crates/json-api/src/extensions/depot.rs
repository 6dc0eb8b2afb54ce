//! Depot helper extensions.

use std::{any::Any, sync::Arc};

use salvo::prelude::{Depot, StatusError};

use crate::state::State;

/// Helpers for mapping depot extraction failures to HTTP errors.
pub(crate) trait DepotExt {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError>;

    /// Shared service handles injected at the root of the router.
    fn state_or_500(&self) -> Result<&Arc<State>, StatusError> {
        self.obtain_or_500::<Arc<State>>()
    }
}

impl DepotExt for Depot {
    fn obtain_or_500<T: Any + Send + Sync>(&self) -> Result<&T, StatusError> {
        self.obtain::<T>()
            .map_err(|_ignored| StatusError::internal_server_error())
    }
}
