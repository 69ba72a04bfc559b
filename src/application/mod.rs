//! Application layer services implementing business logic.
//!
//! This layer orchestrates repository calls and applies business rules.
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::customer_service::CustomerService`] - Customer CRUD orchestration
//! - [`validation`] - Business-rule checks on constructed records

pub mod services;
pub mod validation;
