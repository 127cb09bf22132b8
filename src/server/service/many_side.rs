use chrono::Utc;
use sea_orm::{DatabaseConnection, DbErr, SqlErr};

use crate::{
    model::many_side::ManySideInputDto,
    server::{
        data::{
            many_side::ManySideRepository,
            reference::{DbReferenceGuard, ReferenceGuard},
        },
        error::{validation::ValidationError, AppError},
        model::{
            many_side::{
                ManySide, ManySidePage, ManySidePageQuery, ManySideParams, ManySideWithOwner,
                UpdateManySideParams,
            },
            report::{self, OwnerPrepTime},
        },
        service::not_found,
    },
};

pub struct ManySideService<'a, G: ReferenceGuard = DbReferenceGuard<'a>> {
    db: &'a DatabaseConnection,
    guard: G,
}

impl<'a> ManySideService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guard: DbReferenceGuard::new(db),
        }
    }
}

impl<'a, G: ReferenceGuard> ManySideService<'a, G> {
    /// Creates a service that consults `guard` instead of the database for reference checks.
    pub fn with_guard(db: &'a DatabaseConnection, guard: G) -> Self {
        Self { db, guard }
    }

    /// Validates and inserts a many-side record.
    ///
    /// # Returns
    /// - `Ok(ManySide)` - Created record with its database-assigned id
    /// - `Err(AppError::Validation)` - A schema rule failed, `FK_neve` names no
    ///   owner, or the name is already taken
    pub async fn create(&self, dto: ManySideInputDto) -> Result<ManySide, AppError> {
        let params = ManySideParams::from_dto(dto, Utc::now())?;
        self.ensure_owner(params.fk_neve).await?;

        let repo = ManySideRepository::new(self.db);
        let name = params.name.clone();
        let record = repo
            .create(params)
            .await
            .map_err(|e| duplicate_name(e, Some(&name)))?;

        Ok(ManySide::from_entity(record)?)
    }

    /// Deletes a many-side record
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ManySideRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Gets every many-side record joined with its owner
    pub async fn get_all_with_owner(&self) -> Result<Vec<ManySideWithOwner>, AppError> {
        let repo = ManySideRepository::new(self.db);

        let rows = repo.get_all_with_owner().await?;

        let records: Result<Vec<_>, DbErr> = rows
            .into_iter()
            .map(|(record, owner)| ManySideWithOwner::from_entity(record, owner))
            .collect();

        Ok(records?)
    }

    /// Gets a many-side record joined with its owner
    pub async fn get_by_id(&self, id: i32) -> Result<ManySideWithOwner, AppError> {
        let repo = ManySideRepository::new(self.db);

        let (record, owner) = repo
            .get_by_id_with_owner(id)
            .await?
            .ok_or_else(|| not_found(id))?;

        Ok(ManySideWithOwner::from_entity(record, owner)?)
    }

    /// Finds records whose owner name or description contains `keyword`, ignoring case
    pub async fn search(&self, keyword: &str) -> Result<Vec<ManySideWithOwner>, AppError> {
        let repo = ManySideRepository::new(self.db);

        let rows = repo.search_by_keyword(keyword).await?;

        let records: Result<Vec<_>, DbErr> = rows
            .into_iter()
            .map(|(record, owner)| ManySideWithOwner::from_entity(record, owner))
            .collect();

        Ok(records?)
    }

    /// Builds the owner prep time report (at most three groups)
    pub async fn report(&self) -> Result<Vec<OwnerPrepTime>, AppError> {
        let repo = ManySideRepository::new(self.db);

        let rows = repo.get_report_rows().await?;

        Ok(report::summarize(rows))
    }

    /// Gets one page of many-side records and the size of the matching set
    pub async fn get_paginated(&self, query: ManySidePageQuery) -> Result<ManySidePage, AppError> {
        tracing::debug!(
            "Paginating many-side records: offset={} limit={} sort={:?} filter={:?}",
            query.offset,
            query.limit,
            query.sort,
            query.filter
        );

        let repo = ManySideRepository::new(self.db);

        let (records, total) = repo.get_paginated(&query).await?;

        let records: Result<Vec<_>, DbErr> =
            records.into_iter().map(ManySide::from_entity).collect();

        Ok(ManySidePage {
            records: records?,
            total,
        })
    }

    /// Applies the supplied fields of a partial update.
    ///
    /// Only supplied fields are validated; a new `FK_neve` must name an
    /// existing owner. Returns the updated record joined with its owner.
    pub async fn update(
        &self,
        id: i32,
        dto: ManySideInputDto,
    ) -> Result<ManySideWithOwner, AppError> {
        let params = UpdateManySideParams::from_dto(dto, Utc::now())?;
        if let Some(fk_neve) = params.fk_neve {
            self.ensure_owner(fk_neve).await?;
        }

        let repo = ManySideRepository::new(self.db);
        let name = params.name.clone();
        repo.update(id, params)
            .await
            .map_err(|e| duplicate_name(e, name.as_deref()))?
            .ok_or_else(|| not_found(id))?;

        self.get_by_id(id).await
    }

    /// Replaces a record with a fully validated one.
    ///
    /// A replacement identical to the stored record modifies nothing and is
    /// reported as not found, the same as a missing id.
    pub async fn replace(
        &self,
        id: i32,
        dto: ManySideInputDto,
    ) -> Result<ManySideWithOwner, AppError> {
        let params = ManySideParams::from_dto(dto, Utc::now())?;
        self.ensure_owner(params.fk_neve).await?;

        let repo = ManySideRepository::new(self.db);
        let name = params.name.clone();
        repo.replace(id, params)
            .await
            .map_err(|e| duplicate_name(e, Some(&name)))?
            .ok_or_else(|| not_found(id))?;

        self.get_by_id(id).await
    }

    async fn ensure_owner(&self, owner_id: i32) -> Result<(), AppError> {
        if !self.guard.owner_exists(owner_id).await? {
            return Err(ValidationError::UnknownOwner(owner_id).into());
        }
        Ok(())
    }
}

/// Reports a unique index violation on `name` as a validation failure.
fn duplicate_name(err: DbErr, name: Option<&str>) -> AppError {
    match (err.sql_err(), name) {
        (Some(SqlErr::UniqueConstraintViolation(_)), Some(name)) => {
            ValidationError::DuplicateName(name.to_string()).into()
        }
        _ => err.into(),
    }
}
