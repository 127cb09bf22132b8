use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A one-side record as returned by the API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OneSideDto {
    #[serde(rename = "_id")]
    pub id: i32,
    pub name: String,
    pub email: String,
}

/// An owner embedded into a many-side record without its id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OwnerDto {
    pub name: String,
    pub email: String,
}

/// Request body for creating a one-side record.
///
/// Fields are optional at the wire level so missing values surface as
/// validation errors rather than as body rejections.
#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema)]
pub struct CreateOneSideDto {
    pub name: Option<String>,
    pub email: Option<String>,
}
