//! Wire-level DTOs shared by the controllers and the OpenAPI document.
//!
//! Field names follow the established JSON contract of the API (`_id`,
//! camelCase fields, `FK_neve`), so every DTO carries explicit serde renames.

pub mod api;
pub mod many_side;
pub mod one_side;
pub mod report;
