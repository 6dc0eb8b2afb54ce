//! Test helpers.

use std::sync::Arc;

use jiff::Timestamp;
use salvo::{affix_state::inject, prelude::*};

use customers_app::{
    auth::MockAuthService,
    database::MockDatabaseHealth,
    domain::customers::{
        MockCustomersService,
        records::{CustomerId, CustomerRecord},
    },
};

use crate::state::State;

pub(crate) fn make_customer(id: i64) -> CustomerRecord {
    CustomerRecord {
        id: CustomerId::from_i64(id),
        name: "A".to_string(),
        phone: "555".to_string(),
        active: true,
        created: Timestamp::UNIX_EPOCH,
    }
}

fn strict_auth_mock() -> MockAuthService {
    let mut auth = MockAuthService::new();

    auth.expect_check_manager_credential().never();
    auth.expect_issue_customer_token().never();
    auth.expect_validate_customer_token().never();

    auth
}

fn strict_customers_mock() -> MockCustomersService {
    let mut customers = MockCustomersService::new();

    customers.expect_get_customer().never();
    customers.expect_list_customers().never();
    customers.expect_list_active_customers().never();
    customers.expect_save_customer().never();
    customers.expect_remove_customer().never();
    customers.expect_set_customer_active().never();

    customers
}

fn strict_database_mock() -> MockDatabaseHealth {
    let mut database = MockDatabaseHealth::new();

    database.expect_ping().never();

    database
}

pub(crate) fn state_with_customers(customers: MockCustomersService) -> Arc<State> {
    state_with(customers, strict_auth_mock())
}

pub(crate) fn state_with_auth(auth: MockAuthService) -> Arc<State> {
    state_with(strict_customers_mock(), auth)
}

pub(crate) fn state_with(customers: MockCustomersService, auth: MockAuthService) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(customers),
        Arc::new(auth),
        Arc::new(strict_database_mock()),
    ))
}

pub(crate) fn state_with_database(database: MockDatabaseHealth) -> Arc<State> {
    Arc::new(State::new(
        Arc::new(strict_customers_mock()),
        Arc::new(strict_auth_mock()),
        Arc::new(database),
    ))
}

pub(crate) fn customers_service(customers: MockCustomersService, route: Router) -> Service {
    Service::new(
        Router::new()
            .hoop(inject(state_with_customers(customers)))
            .push(route),
    )
}

pub(crate) fn tokens_service(auth: MockAuthService, route: Router) -> Service {
    Service::new(Router::new().hoop(inject(state_with_auth(auth))).push(route))
}
