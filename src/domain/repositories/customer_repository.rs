//! Repository trait for the customer store.

use crate::domain::entities::Customer;
use async_trait::async_trait;
use uuid::Uuid;

/// Access contract for the authoritative customer collection.
///
/// The collection is ordered: `list` returns customers in insertion order and
/// `update` keeps a record at its position. None of the operations can fail;
/// misses on `update` and `delete` are silent no-ops.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryCustomerRepository`] - in-process store
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_customer.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Returns every customer in current collection order.
    async fn list(&self) -> Vec<Customer>;

    /// Finds the first customer whose id matches.
    async fn find_by_id(&self, id: Uuid) -> Option<Customer>;

    /// Appends a customer to the end of the collection.
    ///
    /// No uniqueness check is made; the caller supplies a fresh id.
    async fn add(&self, customer: Customer);

    /// Replaces the first record with the same id, keeping its position.
    ///
    /// Does nothing when no record matches.
    async fn update(&self, customer: Customer);

    /// Removes the first record with the given id.
    ///
    /// Does nothing when no record matches.
    async fn delete(&self, id: Uuid);

    /// Number of customers currently stored.
    async fn count(&self) -> usize;
}
