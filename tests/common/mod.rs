#![allow(dead_code)]

use axum_test::TestServer;
use customers_api::domain::entities::Customer;
use customers_api::infrastructure::persistence::InMemoryCustomerRepository;
use customers_api::routes::router;
use customers_api::state::AppState;
use std::sync::Arc;

pub use customers_api::infrastructure::persistence::{ACME_ID, CONTOSO_ID};

/// State over the seeded store, plus a handle on the store for direct checks.
pub fn create_test_state() -> (AppState, Arc<InMemoryCustomerRepository>) {
    let repository = Arc::new(InMemoryCustomerRepository::seeded());
    let state = AppState::new(repository.clone());

    (state, repository)
}

/// State over a store holding exactly `customers`.
pub fn create_state_with(customers: Vec<Customer>) -> (AppState, Arc<InMemoryCustomerRepository>) {
    let repository = Arc::new(InMemoryCustomerRepository::with_customers(customers));
    let state = AppState::new(repository.clone());

    (state, repository)
}

/// Test server over the full customer router with a seeded store.
pub fn make_server() -> (TestServer, Arc<InMemoryCustomerRepository>) {
    let (state, repository) = create_test_state();
    let server = TestServer::new(router(state)).unwrap();

    (server, repository)
}
