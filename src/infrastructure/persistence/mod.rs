//! Repository implementations.

mod in_memory_customer_repository;

pub use in_memory_customer_repository::{ACME_ID, CONTOSO_ID, InMemoryCustomerRepository};
