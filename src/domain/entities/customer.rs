//! Domain entities for customers and the projects they own.

use uuid::Uuid;

/// A company record with its owned projects.
///
/// Projects are ordered and have no lifecycle outside the customer that holds
/// them. Values are replaced wholesale on update rather than mutated field by
/// field; see [`Customer::with_changes`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Customer {
    pub id: Uuid,
    pub company_name: String,
    pub projects: Vec<Project>,
}

impl Customer {
    /// Creates a Customer instance from its parts.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let customer = Customer::new(
    ///     Uuid::new_v4(),
    ///     "Northwind Traders".to_string(),
    ///     Vec::new(),
    /// );
    /// ```
    pub fn new(id: Uuid, company_name: String, projects: Vec<Project>) -> Self {
        Self {
            id,
            company_name,
            projects,
        }
    }

    /// Creates a brand-new customer with a freshly generated id and no projects.
    pub fn register(company_name: String) -> Self {
        Self::new(Uuid::new_v4(), company_name, Vec::new())
    }

    /// Builds the replacement record for an update.
    ///
    /// Keeps the identity of `self` and takes everything else from the
    /// arguments. `projects` replaces the existing list entirely.
    pub fn with_changes(&self, company_name: String, projects: Vec<Project>) -> Self {
        Self {
            id: self.id,
            company_name,
            projects,
        }
    }
}

/// A named work item belonging to a customer.
///
/// `customer_id` is a lookup reference only; nothing re-synchronizes it when a
/// customer's project list is replaced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: Uuid,
    pub project_name: String,
    pub customer_id: Uuid,
}

impl Project {
    pub fn new(id: Uuid, project_name: String, customer_id: Uuid) -> Self {
        Self {
            id,
            project_name,
            customer_id,
        }
    }
}
