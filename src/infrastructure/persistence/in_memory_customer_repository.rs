//! In-process implementation of the customer repository.

use crate::domain::entities::{Customer, Project};
use crate::domain::repositories::CustomerRepository;
use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

/// Fixed id of the seeded "Acme" customer.
pub const ACME_ID: Uuid = Uuid::from_u128(0xea30ae59_a0f4_4234_af2f_840fbd442ae0);

/// Fixed id of the seeded "Contoso" customer.
pub const CONTOSO_ID: Uuid = Uuid::from_u128(0x0da62277_d30a_4c99_a277_14f38c142c7f);

/// Customer store backed by an ordered in-memory list.
///
/// Every operation takes the single lock around the list, so each call is
/// atomic on its own. Sequences of calls (check, then act) are not: callers
/// that look a record up and then mutate it can observe another request's
/// change in between. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryCustomerRepository {
    customers: RwLock<Vec<Customer>>,
}

impl InMemoryCustomerRepository {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the demo customers.
    ///
    /// Installs "Acme" and "Contoso" with two projects each. Seeded names
    /// bypass request validation.
    pub fn seeded() -> Self {
        let customers = vec![
            seed_customer(ACME_ID, "Acme"),
            seed_customer(CONTOSO_ID, "Contoso"),
        ];
        debug!(count = customers.len(), "Seeded customer store");

        Self::with_customers(customers)
    }

    /// Creates a store holding exactly `customers`, in order.
    pub fn with_customers(customers: Vec<Customer>) -> Self {
        Self {
            customers: RwLock::new(customers),
        }
    }
}

fn seed_customer(id: Uuid, company_name: &str) -> Customer {
    Customer::new(
        id,
        company_name.to_string(),
        vec![
            Project::new(Uuid::new_v4(), "Project1".to_string(), id),
            Project::new(Uuid::new_v4(), "Project2".to_string(), id),
        ],
    )
}

#[async_trait]
impl CustomerRepository for InMemoryCustomerRepository {
    async fn list(&self) -> Vec<Customer> {
        self.customers.read().await.clone()
    }

    async fn find_by_id(&self, id: Uuid) -> Option<Customer> {
        self.customers
            .read()
            .await
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    async fn add(&self, customer: Customer) {
        self.customers.write().await.push(customer);
    }

    async fn update(&self, customer: Customer) {
        let mut customers = self.customers.write().await;

        match customers.iter_mut().find(|c| c.id == customer.id) {
            Some(slot) => *slot = customer,
            None => debug!(id = %customer.id, "Update skipped, customer not found"),
        }
    }

    async fn delete(&self, id: Uuid) {
        let mut customers = self.customers.write().await;

        match customers.iter().position(|c| c.id == id) {
            Some(index) => {
                customers.remove(index);
            }
            None => debug!(%id, "Delete skipped, customer not found"),
        }
    }

    async fn count(&self) -> usize {
        self.customers.read().await.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_seeded_store_contents() {
        let repo = InMemoryCustomerRepository::seeded();

        let customers = repo.list().await;
        assert_eq!(customers.len(), 2);

        assert_eq!(customers[0].id, ACME_ID);
        assert_eq!(customers[0].company_name, "Acme");
        assert_eq!(customers[1].id, CONTOSO_ID);
        assert_eq!(customers[1].company_name, "Contoso");

        for customer in &customers {
            assert_eq!(customer.projects.len(), 2);
            assert_eq!(customer.projects[0].project_name, "Project1");
            assert_eq!(customer.projects[1].project_name, "Project2");
            assert!(customer.projects.iter().all(|p| p.customer_id == customer.id));
        }
    }

    #[test]
    fn test_seed_constants_match_expected_guids() {
        assert_eq!(
            ACME_ID.to_string(),
            "ea30ae59-a0f4-4234-af2f-840fbd442ae0"
        );
        assert_eq!(
            CONTOSO_ID.to_string(),
            "0da62277-d30a-4c99-a277-14f38c142c7f"
        );
    }

    #[tokio::test]
    async fn test_update_keeps_position() {
        let repo = InMemoryCustomerRepository::seeded();

        let acme = repo.find_by_id(ACME_ID).await.unwrap();
        repo.update(acme.with_changes("Acme Corporation".to_string(), Vec::new()))
            .await;

        let customers = repo.list().await;
        assert_eq!(customers[0].id, ACME_ID);
        assert_eq!(customers[0].company_name, "Acme Corporation");
        assert!(customers[0].projects.is_empty());
        assert_eq!(customers[1].id, CONTOSO_ID);
    }

    #[tokio::test]
    async fn test_update_missing_is_noop() {
        let repo = InMemoryCustomerRepository::seeded();
        let before = repo.list().await;

        repo.update(Customer::register("Ghost Company Ltd".to_string()))
            .await;

        assert_eq!(repo.list().await, before);
    }

    #[tokio::test]
    async fn test_delete_removes_only_first_match() {
        let shared = Uuid::new_v4();
        let repo = InMemoryCustomerRepository::with_customers(vec![
            Customer::new(shared, "First Duplicate".to_string(), Vec::new()),
            Customer::new(shared, "Second Duplicate".to_string(), Vec::new()),
        ]);

        repo.delete(shared).await;

        let remaining = repo.list().await;
        assert_eq!(remaining.len(), 1);
        assert_eq!(remaining[0].company_name, "Second Duplicate");
    }

    #[tokio::test]
    async fn test_add_does_not_check_uniqueness() {
        let repo = InMemoryCustomerRepository::seeded();

        repo.add(Customer::new(ACME_ID, "Acme Clone Ltd".to_string(), Vec::new()))
            .await;

        assert_eq!(repo.count().await, 3);
        // Lookups resolve to the first record with the id.
        assert_eq!(repo.find_by_id(ACME_ID).await.unwrap().company_name, "Acme");
    }

    #[tokio::test]
    async fn test_empty_store() {
        let repo = InMemoryCustomerRepository::new();

        assert!(repo.list().await.is_empty());
        assert_eq!(repo.count().await, 0);
        assert!(repo.find_by_id(ACME_ID).await.is_none());
    }
}
