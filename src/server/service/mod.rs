//! Service layer for business logic and orchestration.
//!
//! This module contains the service layer of the application, which sits between the
//! controller (API) layer and the data (repository) layer. Services are responsible for:
//!
//! - **Validation**: Turning request bodies into validated parameters via the schema rules
//! - **Referential integrity**: Consulting the `ReferenceGuard` before writes and deletes
//! - **Domain Models**: Converting entity models into domain models for the controllers
//! - **Transaction Management**: Running the cascading delete as a single transaction

pub mod many_side;
pub mod one_side;

#[cfg(test)]
mod test;

use crate::server::error::AppError;

/// Error returned whenever a record addressed by id does not exist.
pub(crate) fn not_found(id: i32) -> AppError {
    AppError::NotFound(format!("Document with id {} not found!", id))
}
