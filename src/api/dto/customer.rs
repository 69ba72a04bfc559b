//! DTOs for customer endpoints.
//!
//! Wire names are PascalCase (`Id`, `CompanyName`, `Projects`).

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::domain::entities::{Customer, Project};

/// Customer as returned by every customer endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct CustomerItem {
    pub id: Uuid,
    pub company_name: String,
    pub projects: Vec<ProjectItem>,
}

/// Project as it appears inside a customer, in responses and update requests.
///
/// Projects carry no validation. Missing ids bind as the nil UUID and a
/// missing or `null` name binds as an empty string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ProjectItem {
    #[serde(default)]
    pub id: Uuid,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub project_name: String,
    #[serde(default)]
    pub customer_id: Uuid,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(deserializer).map(Option::unwrap_or_default)
}

/// Request body for `POST /customers`.
///
/// Only `CompanyName` is read. Other fields such as `Id` or `Projects` are
/// ignored; the server assigns the id and starts with no projects.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCustomerRequest {
    #[serde(rename = "CompanyName")]
    #[validate(
        required(message = "The CompanyName field is required."),
        length(
            min = 10,
            message = "The field CompanyName must be a string or array type with a minimum length of '10'."
        )
    )]
    pub company_name: Option<String>,
}

/// Request body for `PUT /customers/{id}`.
///
/// `Projects` replaces the stored list entirely. Absent or `null` stores an
/// empty list.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCustomerRequest {
    #[serde(rename = "CompanyName")]
    #[validate(
        required(message = "The CompanyName field is required."),
        length(
            min = 10,
            message = "The field CompanyName must be a string or array type with a minimum length of '10'."
        )
    )]
    pub company_name: Option<String>,

    #[serde(rename = "Projects", default)]
    pub projects: Option<Vec<ProjectItem>>,
}

impl From<Customer> for CustomerItem {
    fn from(c: Customer) -> Self {
        Self {
            id: c.id,
            company_name: c.company_name,
            projects: c.projects.into_iter().map(ProjectItem::from).collect(),
        }
    }
}

impl From<Project> for ProjectItem {
    fn from(p: Project) -> Self {
        Self {
            id: p.id,
            project_name: p.project_name,
            customer_id: p.customer_id,
        }
    }
}

impl From<ProjectItem> for Project {
    fn from(p: ProjectItem) -> Self {
        Project::new(p.id, p.project_name, p.customer_id)
    }
}
