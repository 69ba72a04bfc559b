//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::CustomerService;
use crate::infrastructure::persistence::InMemoryCustomerRepository;

/// Handler state.
///
/// Holds the single customer service for the process. The repository behind
/// it is created once at startup and shared through the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub customer_service: Arc<CustomerService<InMemoryCustomerRepository>>,
}

impl AppState {
    pub fn new(repository: Arc<InMemoryCustomerRepository>) -> Self {
        Self {
            customer_service: Arc::new(CustomerService::new(repository)),
        }
    }
}
