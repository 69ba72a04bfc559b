//! Infrastructure layer implementing the domain's repository contracts.
//!
//! - [`persistence`] - In-memory repository implementations

pub mod persistence;
