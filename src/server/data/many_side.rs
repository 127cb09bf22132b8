use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, JoinType,
    Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
};

use crate::server::model::{
    many_side::{
        ManySideField, ManySidePageQuery, ManySideParams, ManySideSort, UpdateManySideParams,
    },
    report::{MIN_PREP_TIME, OWNER_NAME_PATTERN},
};

type WithOwner = (entity::many_side::Model, entity::one_side::Model);

pub struct ManySideRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> ManySideRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a validated record and returns it with its database-assigned id
    pub async fn create(&self, params: ManySideParams) -> Result<entity::many_side::Model, DbErr> {
        entity::many_side::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(params.name),
            description: ActiveValue::Set(params.description),
            prep_time: ActiveValue::Set(params.prep_time),
            is_gluten_free: ActiveValue::Set(params.is_gluten_free),
            enum_example: ActiveValue::Set(params.enum_example.map(|e| e.as_str().to_string())),
            min_max_example: ActiveValue::Set(params.min_max_example),
            custom_validator_example: ActiveValue::Set(params.custom_validator_example),
            date_example: ActiveValue::Set(params.date_example),
            fk_neve: ActiveValue::Set(params.fk_neve),
        }
        .insert(self.db)
        .await
    }

    /// Gets every record joined with its owner, ordered by id.
    ///
    /// Records whose owner is missing are left out, matching an inner join.
    pub async fn get_all_with_owner(&self) -> Result<Vec<WithOwner>, DbErr> {
        let rows = entity::prelude::ManySide::find()
            .find_also_related(entity::prelude::OneSide)
            .order_by_asc(entity::many_side::Column::Id)
            .all(self.db)
            .await?;

        Ok(rows
            .into_iter()
            .filter_map(|(record, owner)| owner.map(|owner| (record, owner)))
            .collect())
    }

    /// Gets a record by id joined with its owner
    pub async fn get_by_id_with_owner(&self, id: i32) -> Result<Option<WithOwner>, DbErr> {
        let row = entity::prelude::ManySide::find_by_id(id)
            .find_also_related(entity::prelude::OneSide)
            .one(self.db)
            .await?;

        Ok(row.and_then(|(record, owner)| owner.map(|owner| (record, owner))))
    }

    /// Finds records whose owner name or description contains `keyword`.
    ///
    /// Matching folds case with Unicode lowercasing and treats every character
    /// of the keyword literally, so the rows are filtered after the join.
    pub async fn search_by_keyword(&self, keyword: &str) -> Result<Vec<WithOwner>, DbErr> {
        let keyword = keyword.to_lowercase();

        Ok(self
            .get_all_with_owner()
            .await?
            .into_iter()
            .filter(|(record, owner)| {
                contains_folded(&owner.name, &keyword)
                    || contains_folded(&record.description, &keyword)
            })
            .collect())
    }

    /// Join and match stages of the owner prep time report.
    ///
    /// Returns `(owner name, prep time)` for every record whose owner name
    /// contains the report pattern and whose prep time reaches the minimum.
    pub async fn get_report_rows(&self) -> Result<Vec<(String, f64)>, DbErr> {
        entity::prelude::ManySide::find()
            .select_only()
            .column(entity::one_side::Column::Name)
            .column(entity::many_side::Column::PrepTime)
            .join(JoinType::InnerJoin, entity::many_side::Relation::OneSide.def())
            .filter(entity::one_side::Column::Name.contains(OWNER_NAME_PATTERN))
            .filter(entity::many_side::Column::PrepTime.gte(MIN_PREP_TIME))
            .into_tuple::<(String, f64)>()
            .all(self.db)
            .await
    }

    /// Gets one page of records and the size of the whole matching set.
    ///
    /// A limit of 0 returns every record from the offset on. Ties on the sort
    /// field are broken by id so pages never overlap. A filter is matched like
    /// [`Self::search_by_keyword`], so filtered pages are cut after matching.
    pub async fn get_paginated(
        &self,
        query: &ManySidePageQuery,
    ) -> Result<(Vec<entity::many_side::Model>, u64), DbErr> {
        let (column, order) = sort_order(query.sort);
        let select = entity::prelude::ManySide::find()
            .order_by(column, order)
            .order_by_asc(entity::many_side::Column::Id);

        let Some(filter) = &query.filter else {
            let total = entity::prelude::ManySide::find().count(self.db).await?;
            let limit = if query.limit == 0 {
                i64::MAX as u64
            } else {
                query.limit
            };
            let records = select
                .offset(query.offset)
                .limit(limit)
                .all(self.db)
                .await?;

            return Ok((records, total));
        };

        let filter = filter.to_lowercase();
        let matching: Vec<_> = select
            .all(self.db)
            .await?
            .into_iter()
            .filter(|record| {
                contains_folded(&record.name, &filter)
                    || contains_folded(&record.description, &filter)
            })
            .collect();

        let total = matching.len() as u64;
        let offset = usize::try_from(query.offset).unwrap_or(usize::MAX);
        let limit = match query.limit {
            0 => usize::MAX,
            limit => usize::try_from(limit).unwrap_or(usize::MAX),
        };
        let records = matching.into_iter().skip(offset).take(limit).collect();

        Ok((records, total))
    }

    /// Writes the supplied fields of a partial update.
    ///
    /// Returns `None` when no record has the given id. An update without any
    /// supplied field returns the stored record untouched.
    pub async fn update(
        &self,
        id: i32,
        params: UpdateManySideParams,
    ) -> Result<Option<entity::many_side::Model>, DbErr> {
        let Some(record) = entity::prelude::ManySide::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active_model: entity::many_side::ActiveModel = record.clone().into();
        if let Some(name) = params.name {
            active_model.name = ActiveValue::Set(name);
        }
        if let Some(description) = params.description {
            active_model.description = ActiveValue::Set(description);
        }
        if let Some(prep_time) = params.prep_time {
            active_model.prep_time = ActiveValue::Set(prep_time);
        }
        if let Some(is_gluten_free) = params.is_gluten_free {
            active_model.is_gluten_free = ActiveValue::Set(is_gluten_free);
        }
        if let Some(enum_example) = params.enum_example {
            active_model.enum_example = ActiveValue::Set(Some(enum_example.as_str().to_string()));
        }
        if let Some(min_max_example) = params.min_max_example {
            active_model.min_max_example = ActiveValue::Set(min_max_example);
        }
        if let Some(value) = params.custom_validator_example {
            active_model.custom_validator_example = ActiveValue::Set(Some(value));
        }
        if let Some(date_example) = params.date_example {
            active_model.date_example = ActiveValue::Set(date_example);
        }
        if let Some(fk_neve) = params.fk_neve {
            active_model.fk_neve = ActiveValue::Set(fk_neve);
        }

        if !active_model.is_changed() {
            return Ok(Some(record));
        }

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Replaces every field of a record.
    ///
    /// Returns `None` when no record has the given id or when the replacement
    /// is identical to the stored record, i.e. whenever nothing was modified.
    pub async fn replace(
        &self,
        id: i32,
        params: ManySideParams,
    ) -> Result<Option<entity::many_side::Model>, DbErr> {
        let Some(record) = entity::prelude::ManySide::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let replacement = entity::many_side::Model {
            id,
            name: params.name,
            description: params.description,
            prep_time: params.prep_time,
            is_gluten_free: params.is_gluten_free,
            enum_example: params.enum_example.map(|e| e.as_str().to_string()),
            min_max_example: params.min_max_example,
            custom_validator_example: params.custom_validator_example,
            date_example: params.date_example,
            fk_neve: params.fk_neve,
        };

        if replacement == record {
            return Ok(None);
        }

        let active_model = entity::many_side::ActiveModel {
            id: ActiveValue::Unchanged(id),
            name: ActiveValue::Set(replacement.name),
            description: ActiveValue::Set(replacement.description),
            prep_time: ActiveValue::Set(replacement.prep_time),
            is_gluten_free: ActiveValue::Set(replacement.is_gluten_free),
            enum_example: ActiveValue::Set(replacement.enum_example),
            min_max_example: ActiveValue::Set(replacement.min_max_example),
            custom_validator_example: ActiveValue::Set(replacement.custom_validator_example),
            date_example: ActiveValue::Set(replacement.date_example),
            fk_neve: ActiveValue::Set(replacement.fk_neve),
        };

        Ok(Some(active_model.update(self.db).await?))
    }

    /// Deletes a record
    ///
    /// Returns `false` when no record had the given id.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::ManySide::delete_by_id(id)
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }

    /// Deletes every record referencing `owner_id` and returns how many were removed
    pub async fn delete_by_owner(&self, owner_id: i32) -> Result<u64, DbErr> {
        let result = entity::prelude::ManySide::delete_many()
            .filter(entity::many_side::Column::FkNeve.eq(owner_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected)
    }
}

/// Substring test against an already lowercased needle.
fn contains_folded(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(needle)
}

fn sort_order(sort: ManySideSort) -> (entity::many_side::Column, Order) {
    use entity::many_side::Column;

    let column = match sort.field {
        ManySideField::Id => Column::Id,
        ManySideField::Name => Column::Name,
        ManySideField::Description => Column::Description,
        ManySideField::PrepTime => Column::PrepTime,
        ManySideField::IsGlutenFree => Column::IsGlutenFree,
        ManySideField::EnumExample => Column::EnumExample,
        ManySideField::MinMaxExample => Column::MinMaxExample,
        ManySideField::CustomValidatorExample => Column::CustomValidatorExample,
        ManySideField::DateExample => Column::DateExample,
        ManySideField::FkNeve => Column::FkNeve,
    };
    let order = if sort.descending {
        Order::Desc
    } else {
        Order::Asc
    };

    (column, order)
}
