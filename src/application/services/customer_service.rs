//! Customer management service.

use crate::application::validation::validate_customer;
use crate::domain::entities::{Customer, Project};
use crate::domain::repositories::CustomerRepository;
use crate::error::AppError;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

/// Service coordinating customer reads and writes.
///
/// Handles:
/// - Identity assignment on create (client-supplied ids are never used)
/// - Merge-on-write updates that replace the project list wholesale
/// - Existence pre-checks that decide 404 before any write happens
///
/// Every write passes [`validate_customer`] before it reaches the repository.
pub struct CustomerService<R: CustomerRepository> {
    repository: Arc<R>,
}

impl<R: CustomerRepository> CustomerService<R> {
    /// Creates a new customer service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Lists all customers in store order.
    pub async fn list_customers(&self) -> Vec<Customer> {
        self.repository.list().await
    }

    /// Retrieves a customer by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no customer has this id.
    pub async fn get_customer(&self, id: Uuid) -> Result<Customer, AppError> {
        self.repository
            .find_by_id(id)
            .await
            .ok_or_else(|| not_found(id))
    }

    /// Creates a customer with a fresh id and no projects.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the business rules reject the record.
    pub async fn create_customer(&self, company_name: String) -> Result<Customer, AppError> {
        let customer = Customer::register(company_name);
        validate_customer(&customer)?;

        self.repository.add(customer.clone()).await;
        info!(id = %customer.id, "Customer created");

        Ok(customer)
    }

    /// Replaces the name and projects of an existing customer.
    ///
    /// `projects: None` stores an empty list; the existing projects are not
    /// kept. Project back-references are stored as given.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist, before
    /// any validation runs.
    /// Returns [`AppError::Validation`] if the merged record is rejected.
    pub async fn replace_customer(
        &self,
        id: Uuid,
        company_name: String,
        projects: Option<Vec<Project>>,
    ) -> Result<Customer, AppError> {
        let existing = self.get_customer(id).await?;

        let updated = existing.with_changes(company_name, projects.unwrap_or_default());
        validate_customer(&updated)?;

        self.repository.update(updated.clone()).await;
        info!(%id, projects = updated.projects.len(), "Customer updated");

        Ok(updated)
    }

    /// Deletes a customer after confirming it exists.
    ///
    /// The outcome is decided by the existence check; a concurrent delete
    /// between check and removal still reports success.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the customer does not exist.
    pub async fn delete_customer(&self, id: Uuid) -> Result<(), AppError> {
        if self.repository.find_by_id(id).await.is_none() {
            return Err(not_found(id));
        }

        self.repository.delete(id).await;
        info!(%id, "Customer deleted");

        Ok(())
    }

    /// Number of stored customers.
    pub async fn count_customers(&self) -> usize {
        self.repository.count().await
    }
}

fn not_found(id: Uuid) -> AppError {
    AppError::not_found(format!("Customer {id} not found"))
}
