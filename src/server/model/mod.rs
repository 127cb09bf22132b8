//! Server-side domain models and parameter types.
//!
//! This module contains domain models used throughout the service layer, representing
//! the two record kinds and the parameters of their operations. Domain models are
//! converted from entity models at the repository boundary and transformed to DTOs at
//! the controller boundary. Schema rules live in `schema` and are applied when request
//! bodies are turned into parameter types.

pub mod many_side;
pub mod one_side;
pub mod report;
pub mod schema;
