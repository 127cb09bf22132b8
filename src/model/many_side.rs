use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::one_side::{OneSideDto, OwnerDto};

/// A many-side record with `FK_neve` as the plain owner id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManySideDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub prep_time: f64,
    pub is_gluten_free: bool,
    pub enum_example: Option<String>,
    pub min_max_example: i32,
    pub custom_validator_example: Option<i32>,
    pub date_example: DateTime<Utc>,
    #[serde(rename = "FK_neve")]
    pub fk_neve: i32,
}

/// A many-side record with its owner embedded, owner id included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManySideWithOwnerDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub prep_time: f64,
    pub is_gluten_free: bool,
    pub enum_example: Option<String>,
    pub min_max_example: i32,
    pub custom_validator_example: Option<i32>,
    pub date_example: DateTime<Utc>,
    #[serde(rename = "FK_neve")]
    pub owner: OneSideDto,
}

/// A single many-side record with its owner embedded, owner id omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManySideDetailDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub description: String,
    pub prep_time: f64,
    pub is_gluten_free: bool,
    pub enum_example: Option<String>,
    pub min_max_example: i32,
    pub custom_validator_example: Option<i32>,
    pub date_example: DateTime<Utc>,
    #[serde(rename = "FK_neve")]
    pub owner: OwnerDto,
}

/// A keyword search hit: no record id, no `prepTime`, owner fields flattened.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct KeywordMatchDto {
    pub name: String,
    pub description: String,
    pub is_gluten_free: bool,
    pub enum_example: Option<String>,
    pub min_max_example: i32,
    pub custom_validator_example: Option<i32>,
    pub date_example: DateTime<Utc>,
    #[serde(rename = "FK_neve")]
    pub fk_neve: i32,
    pub owner_name: String,
    pub owner_email: String,
}

/// Request body for POST, PUT and PATCH on many-side records.
///
/// Every field is optional on the wire. Which ones are required depends on the
/// operation and is decided by the schema rules, not by deserialization.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ManySideInputDto {
    pub name: Option<String>,
    pub description: Option<String>,
    pub prep_time: Option<f64>,
    pub is_gluten_free: Option<bool>,
    pub enum_example: Option<String>,
    pub min_max_example: Option<i32>,
    pub custom_validator_example: Option<i32>,
    pub date_example: Option<DateTime<Utc>>,
    #[serde(rename = "FK_neve")]
    pub fk_neve: Option<i32>,
}
