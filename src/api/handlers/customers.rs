//! Handlers for customer endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{HeaderName, StatusCode, header},
};
use uuid::Uuid;
use validator::Validate;

use crate::api::dto::customer::{CreateCustomerRequest, CustomerItem, UpdateCustomerRequest};
use crate::domain::entities::Project;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves the `{id}` path segment.
///
/// A segment that is not a UUID cannot name a customer, so it is reported as
/// 404 rather than as a malformed request.
fn customer_id(path: Result<Path<Uuid>, PathRejection>) -> Result<Uuid, AppError> {
    path.map(|Path(id)| id)
        .map_err(|e| AppError::not_found(format!("No customer route matches: {}", e.body_text())))
}

/// Lists all customers.
///
/// # Endpoint
///
/// `GET /customers`
pub async fn list_customers_handler(State(state): State<AppState>) -> Json<Vec<CustomerItem>> {
    let customers = state.customer_service.list_customers().await;

    Json(customers.into_iter().map(CustomerItem::from).collect())
}

/// Returns a single customer.
///
/// # Endpoint
///
/// `GET /customers/{id}`
///
/// # Errors
///
/// Returns 404 if no customer has this id.
pub async fn get_customer_handler(
    path: Result<Path<Uuid>, PathRejection>,
    State(state): State<AppState>,
) -> Result<Json<CustomerItem>, AppError> {
    let id = customer_id(path)?;
    let customer = state.customer_service.get_customer(id).await?;

    Ok(Json(customer.into()))
}

/// Creates a customer.
///
/// # Endpoint
///
/// `POST /customers`
///
/// # Request Body
///
/// ```json
/// { "CompanyName": "NewCorp LLC" }
/// ```
///
/// Any `Id` or `Projects` in the body is ignored. The response carries the
/// new resource path in the `Location` header.
///
/// # Errors
///
/// Returns 400 if the body is malformed or `CompanyName` is missing or
/// shorter than 10 characters.
pub async fn create_customer_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateCustomerRequest>, JsonRejection>,
) -> Result<(StatusCode, [(HeaderName, String); 1], Json<CustomerItem>), AppError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let customer = state
        .customer_service
        .create_customer(payload.company_name.unwrap_or_default())
        .await?;

    let location = format!("/customers/{}", customer.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(customer.into()),
    ))
}

/// Replaces a customer's name and projects.
///
/// # Endpoint
///
/// `PUT /customers/{id}`
///
/// # Request Body
///
/// ```json
/// {
///   "CompanyName": "Acme Corp X",
///   "Projects": [
///     { "Id": "...", "ProjectName": "Launch", "CustomerId": "..." }
///   ]
/// }
/// ```
///
/// `Projects` may be omitted; the customer then has no projects afterwards.
///
/// # Errors
///
/// Returns 404 if `{id}` is not a UUID.
/// Returns 400 if the body fails validation, whether or not the id exists.
/// Returns 404 if no customer has this id.
pub async fn update_customer_handler(
    path: Result<Path<Uuid>, PathRejection>,
    State(state): State<AppState>,
    payload: Result<Json<UpdateCustomerRequest>, JsonRejection>,
) -> Result<Json<CustomerItem>, AppError> {
    let id = customer_id(path)?;

    let Json(payload) = payload?;
    payload.validate()?;

    let projects = payload
        .projects
        .map(|items| items.into_iter().map(Project::from).collect());

    let customer = state
        .customer_service
        .replace_customer(id, payload.company_name.unwrap_or_default(), projects)
        .await?;

    Ok(Json(customer.into()))
}

/// Deletes a customer.
///
/// # Endpoint
///
/// `DELETE /customers/{id}`
///
/// # Errors
///
/// Returns 404 if no customer has this id.
pub async fn delete_customer_handler(
    path: Result<Path<Uuid>, PathRejection>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let id = customer_id(path)?;
    state.customer_service.delete_customer(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
