//! # Customers API
//!
//! A small REST service for managing customers (companies) and the projects
//! they own, backed by an in-memory store and built with Axum.
//!
//! ## Architecture
//!
//! The crate keeps a clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - Customer and project entities, repository trait
//! - **Application Layer** ([`application`]) - Customer service and business-rule validation
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory repository implementation
//! - **API Layer** ([`api`]) - REST handlers, DTOs with schema validation, middleware
//!
//! ## Endpoints
//!
//! - `GET    /customers`
//! - `GET    /customers/{id}`
//! - `POST   /customers`
//! - `PUT    /customers/{id}`
//! - `DELETE /customers/{id}`
//! - `GET    /health`
//!
//! ## Quick Start
//!
//! ```bash
//! export LISTEN="127.0.0.1:3000"   # Optional
//! export LOG_FORMAT="json"         # Optional
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::CustomerService;
    pub use crate::domain::entities::{Customer, Project};
    pub use crate::domain::repositories::CustomerRepository;
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryCustomerRepository;
    pub use crate::state::AppState;
}
