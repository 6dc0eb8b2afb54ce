//! State

use std::sync::Arc;

use customers_app::{
    auth::AuthService, context::AppContext, database::DatabaseHealth,
    domain::customers::CustomersService,
};

#[derive(Clone)]
pub(crate) struct State {
    pub(crate) customers: Arc<dyn CustomersService>,
    pub(crate) auth: Arc<dyn AuthService>,
    pub(crate) database: Arc<dyn DatabaseHealth>,
}

impl State {
    #[must_use]
    pub(crate) fn new(
        customers: Arc<dyn CustomersService>,
        auth: Arc<dyn AuthService>,
        database: Arc<dyn DatabaseHealth>,
    ) -> Self {
        Self {
            customers,
            auth,
            database,
        }
    }

    #[must_use]
    pub(crate) fn from_app_context(app: &AppContext) -> Arc<Self> {
        Arc::new(Self::new(
            app.customers.clone(),
            app.auth.clone(),
            app.database.clone(),
        ))
    }
}
