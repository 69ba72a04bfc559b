//! Core domain entities.
//!
//! - [`Customer`] - A company record owning an ordered list of projects
//! - [`Project`] - A work item referencing its owning customer

pub mod customer;

pub use customer::{Customer, Project};
