//! Many-side domain models and operation parameters.
//!
//! Request bodies are turned into validated parameter types here, so the
//! repository only ever sees values that passed the schema rules.

use chrono::{DateTime, Utc};
use sea_orm::DbErr;

use crate::{
    model::many_side::{
        KeywordMatchDto, ManySideDetailDto, ManySideDto, ManySideInputDto, ManySideWithOwnerDto,
    },
    server::{
        error::validation::ValidationError,
        model::{
            one_side::OneSide,
            schema::{self, Beverage},
        },
    },
};

/// The referencing record of the one-to-many pair.
#[derive(Debug, Clone, PartialEq)]
pub struct ManySide {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub prep_time: f64,
    pub is_gluten_free: bool,
    pub enum_example: Option<Beverage>,
    pub min_max_example: i32,
    pub custom_validator_example: Option<i32>,
    pub date_example: DateTime<Utc>,
    /// Id of the referenced one-side record.
    pub fk_neve: i32,
}

impl ManySide {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ManySide)` - Converted domain model
    /// - `Err(DbErr::Custom)` - Stored `enum_example` is not a supported value
    pub fn from_entity(entity: entity::many_side::Model) -> Result<Self, DbErr> {
        let enum_example = entity
            .enum_example
            .map(|value| value.parse::<Beverage>())
            .transpose()
            .map_err(|e| DbErr::Custom(format!("Failed to parse enum_example: {}", e)))?;

        Ok(Self {
            id: entity.id,
            name: entity.name,
            description: entity.description,
            prep_time: entity.prep_time,
            is_gluten_free: entity.is_gluten_free,
            enum_example,
            min_max_example: entity.min_max_example,
            custom_validator_example: entity.custom_validator_example,
            date_example: entity.date_example,
            fk_neve: entity.fk_neve,
        })
    }

    pub fn into_dto(self) -> ManySideDto {
        ManySideDto {
            id: self.id,
            name: self.name,
            description: self.description,
            prep_time: self.prep_time,
            is_gluten_free: self.is_gluten_free,
            enum_example: self.enum_example.map(|e| e.as_str().to_string()),
            min_max_example: self.min_max_example,
            custom_validator_example: self.custom_validator_example,
            date_example: self.date_example,
            fk_neve: self.fk_neve,
        }
    }
}

/// A many-side record joined with the one-side record it references.
#[derive(Debug, Clone, PartialEq)]
pub struct ManySideWithOwner {
    pub record: ManySide,
    pub owner: OneSide,
}

impl ManySideWithOwner {
    /// Converts a joined entity pair to a domain model.
    pub fn from_entity(
        record: entity::many_side::Model,
        owner: entity::one_side::Model,
    ) -> Result<Self, DbErr> {
        Ok(Self {
            record: ManySide::from_entity(record)?,
            owner: OneSide::from_entity(owner),
        })
    }

    /// Listing form: owner embedded with its id.
    pub fn into_dto(self) -> ManySideWithOwnerDto {
        let r = self.record;
        ManySideWithOwnerDto {
            id: r.id,
            name: r.name,
            description: r.description,
            prep_time: r.prep_time,
            is_gluten_free: r.is_gluten_free,
            enum_example: r.enum_example.map(|e| e.as_str().to_string()),
            min_max_example: r.min_max_example,
            custom_validator_example: r.custom_validator_example,
            date_example: r.date_example,
            owner: self.owner.into_dto(),
        }
    }

    /// Single-record form: owner embedded without its id.
    pub fn into_detail_dto(self) -> ManySideDetailDto {
        let r = self.record;
        ManySideDetailDto {
            id: r.id,
            name: r.name,
            description: r.description,
            prep_time: r.prep_time,
            is_gluten_free: r.is_gluten_free,
            enum_example: r.enum_example.map(|e| e.as_str().to_string()),
            min_max_example: r.min_max_example,
            custom_validator_example: r.custom_validator_example,
            date_example: r.date_example,
            owner: self.owner.into_owner_dto(),
        }
    }

    /// Keyword search form: drops the record id and `prepTime`, flattens the owner.
    pub fn into_keyword_match_dto(self) -> KeywordMatchDto {
        let r = self.record;
        KeywordMatchDto {
            name: r.name,
            description: r.description,
            is_gluten_free: r.is_gluten_free,
            enum_example: r.enum_example.map(|e| e.as_str().to_string()),
            min_max_example: r.min_max_example,
            custom_validator_example: r.custom_validator_example,
            date_example: r.date_example,
            fk_neve: r.fk_neve,
            owner_name: self.owner.name,
            owner_email: self.owner.email,
        }
    }
}

/// A complete, validated many-side record without an id.
///
/// Used both for inserts and for full replacement.
#[derive(Debug, Clone, PartialEq)]
pub struct ManySideParams {
    pub name: String,
    pub description: String,
    pub prep_time: f64,
    pub is_gluten_free: bool,
    pub enum_example: Option<Beverage>,
    pub min_max_example: i32,
    pub custom_validator_example: Option<i32>,
    pub date_example: DateTime<Utc>,
    pub fk_neve: i32,
}

impl ManySideParams {
    /// Applies every schema rule and the field defaults to a request body.
    ///
    /// Fields are checked in declaration order and the first failure is
    /// returned. `prepTime` defaults to 12 and `dateExample` to `now`; a
    /// supplied date must lie between `now` and the end of 2100.
    ///
    /// The owner reference is only checked for presence here; whether the
    /// owner exists is decided by the reference guard.
    pub fn from_dto(dto: ManySideInputDto, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        let name = schema::required_str("name", dto.name)?;
        schema::name(&name)?;

        let description = schema::required_str("description", dto.description)?;
        schema::description(&description)?;

        let prep_time = dto.prep_time.unwrap_or(schema::DEFAULT_PREP_TIME);
        let is_gluten_free = schema::required("isGlutenFree", dto.is_gluten_free)?;

        let enum_example = dto
            .enum_example
            .map(|value| value.parse::<Beverage>())
            .transpose()?;

        let min_max_example = schema::required("minMaxExample", dto.min_max_example)?;
        schema::stars(min_max_example)?;

        if let Some(value) = dto.custom_validator_example {
            schema::even(value)?;
        }

        let date_example = match dto.date_example {
            Some(value) => {
                schema::date(value, now)?;
                value
            }
            None => now,
        };

        let fk_neve = schema::required("FK_neve", dto.fk_neve)?;

        Ok(Self {
            name,
            description,
            prep_time,
            is_gluten_free,
            enum_example,
            min_max_example,
            custom_validator_example: dto.custom_validator_example,
            date_example,
            fk_neve,
        })
    }
}

/// Validated subset of fields for a partial update.
///
/// Only supplied fields are validated and written.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateManySideParams {
    pub name: Option<String>,
    pub description: Option<String>,
    pub prep_time: Option<f64>,
    pub is_gluten_free: Option<bool>,
    pub enum_example: Option<Beverage>,
    pub min_max_example: Option<i32>,
    pub custom_validator_example: Option<i32>,
    pub date_example: Option<DateTime<Utc>>,
    pub fk_neve: Option<i32>,
}

impl UpdateManySideParams {
    pub fn from_dto(dto: ManySideInputDto, now: DateTime<Utc>) -> Result<Self, ValidationError> {
        if let Some(name) = &dto.name {
            if name.is_empty() {
                return Err(ValidationError::Required { field: "name" });
            }
            schema::name(name)?;
        }
        if let Some(description) = &dto.description {
            schema::description(description)?;
        }
        let enum_example = dto
            .enum_example
            .map(|value| value.parse::<Beverage>())
            .transpose()?;
        if let Some(value) = dto.min_max_example {
            schema::stars(value)?;
        }
        if let Some(value) = dto.custom_validator_example {
            schema::even(value)?;
        }
        if let Some(value) = dto.date_example {
            schema::date(value, now)?;
        }

        Ok(Self {
            name: dto.name,
            description: dto.description,
            prep_time: dto.prep_time,
            is_gluten_free: dto.is_gluten_free,
            enum_example,
            min_max_example: dto.min_max_example,
            custom_validator_example: dto.custom_validator_example,
            date_example: dto.date_example,
            fk_neve: dto.fk_neve,
        })
    }
}

/// Sortable many-side fields, named as on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManySideField {
    Id,
    Name,
    Description,
    PrepTime,
    IsGlutenFree,
    EnumExample,
    MinMaxExample,
    CustomValidatorExample,
    DateExample,
    FkNeve,
}

/// Sort order: a field, ascending unless prefixed with `-`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ManySideSort {
    pub field: ManySideField,
    pub descending: bool,
}

impl ManySideSort {
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        let (descending, field_name) = match value.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, value.strip_prefix('+').unwrap_or(value)),
        };

        let field = match field_name {
            "_id" | "id" => ManySideField::Id,
            "name" => ManySideField::Name,
            "description" => ManySideField::Description,
            "prepTime" => ManySideField::PrepTime,
            "isGlutenFree" => ManySideField::IsGlutenFree,
            "enumExample" => ManySideField::EnumExample,
            "minMaxExample" => ManySideField::MinMaxExample,
            "customValidatorExample" => ManySideField::CustomValidatorExample,
            "dateExample" => ManySideField::DateExample,
            "FK_neve" => ManySideField::FkNeve,
            _ => return Err(ValidationError::UnknownSortField(value.to_string())),
        };

        Ok(Self { field, descending })
    }
}

/// Parameters of the offset/limit listing.
#[derive(Debug, Clone, PartialEq)]
pub struct ManySidePageQuery {
    pub offset: u64,
    pub limit: u64,
    pub sort: ManySideSort,
    /// Case-insensitive substring matched against `name` or `description`.
    /// Never `Some("")`.
    pub filter: Option<String>,
}

impl ManySidePageQuery {
    pub fn new(offset: u64, limit: u64, sort: ManySideSort, filter: Option<String>) -> Self {
        Self {
            offset,
            limit,
            sort,
            filter: filter.filter(|f| !f.is_empty()),
        }
    }
}

/// One page of many-side records plus the size of the whole matching set.
#[derive(Debug, Clone, PartialEq)]
pub struct ManySidePage {
    pub records: Vec<ManySide>,
    pub total: u64,
}
