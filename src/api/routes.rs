//! API route configuration.

use crate::api::handlers::{
    create_customer_handler, delete_customer_handler, get_customer_handler,
    list_customers_handler, update_customer_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Customer routes.
///
/// # Endpoints
///
/// - `GET    /customers`        - List all customers
/// - `POST   /customers`        - Create a customer
/// - `GET    /customers/{id}`   - Fetch a customer
/// - `PUT    /customers/{id}`   - Replace a customer's name and projects
/// - `DELETE /customers/{id}`   - Delete a customer
pub fn customer_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/customers",
            get(list_customers_handler).post(create_customer_handler),
        )
        .route(
            "/customers/{id}",
            get(get_customer_handler)
                .put(update_customer_handler)
                .delete(delete_customer_handler),
        )
}
