use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::one_side::CreateOneSideParams;

pub struct OneSideRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> OneSideRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Gets all one-side records ordered by id
    pub async fn get_all(&self) -> Result<Vec<entity::one_side::Model>, DbErr> {
        entity::prelude::OneSide::find()
            .order_by_asc(entity::one_side::Column::Id)
            .all(self.db)
            .await
    }

    /// Returns the highest id in use, or `None` for an empty table.
    ///
    /// Reads a single row through the primary key index.
    pub async fn max_id(&self) -> Result<Option<i32>, DbErr> {
        let last = entity::prelude::OneSide::find()
            .order_by_desc(entity::one_side::Column::Id)
            .one(self.db)
            .await?;

        Ok(last.map(|model| model.id))
    }

    /// Inserts a one-side record under the given id
    pub async fn create(
        &self,
        id: i32,
        params: CreateOneSideParams,
    ) -> Result<entity::one_side::Model, DbErr> {
        entity::one_side::ActiveModel {
            id: ActiveValue::Set(id),
            name: ActiveValue::Set(params.name),
            email: ActiveValue::Set(params.email),
        }
        .insert(self.db)
        .await
    }

    /// Checks if a one-side record with the given id exists
    pub async fn exists(&self, id: i32) -> Result<bool, DbErr> {
        let count = entity::prelude::OneSide::find()
            .filter(entity::one_side::Column::Id.eq(id))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Deletes a one-side record
    ///
    /// Returns `false` when no record had the given id.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::OneSide::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
