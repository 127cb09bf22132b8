use crate::server::{data::one_side::OneSideRepository, model::one_side::CreateOneSideParams};
use sea_orm::{DbErr, EntityTrait, PaginatorTrait};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod get_all;
mod max_id;
