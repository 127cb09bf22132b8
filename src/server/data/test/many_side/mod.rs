use crate::server::{
    data::{many_side::ManySideRepository, one_side::OneSideRepository},
    model::{
        many_side::{ManySidePageQuery, ManySideParams, ManySideSort, UpdateManySideParams},
        schema::Beverage,
    },
};
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait, TransactionTrait};
use test_utils::{builder::TestBuilder, factory, factory::many_side::ManySideFactory};

mod get_paginated;
mod get_report_rows;
mod replace;
mod update;

/// Builds a complete parameter set referencing `fk_neve`.
fn params(name: &str, fk_neve: i32) -> ManySideParams {
    ManySideParams {
        name: name.to_string(),
        description: format!("A description of {}", name),
        prep_time: 15.0,
        is_gluten_free: true,
        enum_example: Some(Beverage::Tea),
        min_max_example: 4,
        custom_validator_example: Some(6),
        date_example: Utc::now() + Duration::days(7),
        fk_neve,
    }
}
