//! Application-level foreign key checks between the two collections.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, QueryFilter};

use crate::server::data::one_side::OneSideRepository;

/// Guards the `FK_neve` reference independently of the backing store.
///
/// The store holds no foreign key constraint, so every write that creates a
/// reference and every non-cascading delete of an owner goes through a guard.
#[async_trait]
pub trait ReferenceGuard {
    /// Whether at least one many-side record references `owner_id`.
    async fn has_dependents(&self, owner_id: i32) -> Result<bool, DbErr>;

    /// Whether `owner_id` names an existing one-side record.
    async fn owner_exists(&self, owner_id: i32) -> Result<bool, DbErr>;
}

/// `ReferenceGuard` backed by the SeaORM connection.
pub struct DbReferenceGuard<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DbReferenceGuard<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ReferenceGuard for DbReferenceGuard<'_> {
    async fn has_dependents(&self, owner_id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::ManySide::find()
            .filter(entity::many_side::Column::FkNeve.eq(owner_id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    async fn owner_exists(&self, owner_id: i32) -> Result<bool, DbErr> {
        OneSideRepository::new(self.db).exists(owner_id).await
    }
}
