use async_trait::async_trait;
use chrono::{Duration, Utc};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory, factory::many_side::ManySideFactory};

use crate::{
    model::{many_side::ManySideInputDto, one_side::CreateOneSideDto},
    server::{
        data::reference::ReferenceGuard,
        error::{validation::ValidationError, AppError},
        model::many_side::{ManySidePageQuery, ManySideSort},
        service::{many_side::ManySideService, one_side::OneSideService},
    },
};


/// Reference guard answering from fixed values instead of the database.
struct StubGuard {
    has_dependents: bool,
    owner_exists: bool,
}

#[async_trait]
impl ReferenceGuard for StubGuard {
    async fn has_dependents(&self, _owner_id: i32) -> Result<bool, DbErr> {
        Ok(self.has_dependents)
    }

    async fn owner_exists(&self, _owner_id: i32) -> Result<bool, DbErr> {
        Ok(self.owner_exists)
    }
}

/// A request body that passes every schema rule for owner `fk_neve`.
fn valid_input(name: &str, fk_neve: i32) -> ManySideInputDto {
    ManySideInputDto {
        name: Some(name.to_string()),
        description: Some("Slow roasted vegetables".to_string()),
        prep_time: Some(25.0),
        is_gluten_free: Some(true),
        enum_example: Some("Coffee".to_string()),
        min_max_example: Some(5),
        custom_validator_example: Some(4),
        date_example: Some(Utc::now() + Duration::days(3)),
        fk_neve: Some(fk_neve),
    }
}
