use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// One group of the owner-name prep time report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct OwnerPrepTimeDto {
    pub owner_name: String,
    pub avg_prep_time: f64,
    pub total_recipes: u64,
}
