//! One-side domain models and parameters.

use crate::{
    model::one_side::{CreateOneSideDto, OneSideDto, OwnerDto},
    server::{error::validation::ValidationError, model::schema},
};

/// The referenced record of the one-to-many pair.
#[derive(Debug, Clone, PartialEq)]
pub struct OneSide {
    pub id: i32,
    pub name: String,
    pub email: String,
}

impl OneSide {
    /// Converts an entity model to a domain model at the repository boundary.
    pub fn from_entity(entity: entity::one_side::Model) -> Self {
        Self {
            id: entity.id,
            name: entity.name,
            email: entity.email,
        }
    }

    pub fn into_dto(self) -> OneSideDto {
        OneSideDto {
            id: self.id,
            name: self.name,
            email: self.email,
        }
    }

    /// Converts to the embedded owner form that omits the id.
    pub fn into_owner_dto(self) -> OwnerDto {
        OwnerDto {
            name: self.name,
            email: self.email,
        }
    }
}

/// Validated fields for a new one-side record. The id is assigned on insert.
#[derive(Debug, Clone)]
pub struct CreateOneSideParams {
    pub name: String,
    pub email: String,
}

impl CreateOneSideParams {
    /// Applies the one-side schema rules to a request body.
    ///
    /// # Returns
    /// - `Ok(CreateOneSideParams)` - Both required fields present
    /// - `Err(ValidationError::Required)` - The first missing field
    pub fn from_dto(dto: CreateOneSideDto) -> Result<Self, ValidationError> {
        Ok(Self {
            email: schema::required_str("email", dto.email)?,
            name: schema::required_str("name", dto.name)?,
        })
    }
}
