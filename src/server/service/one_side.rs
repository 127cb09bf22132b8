use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::one_side::CreateOneSideDto,
    server::{
        data::{
            many_side::ManySideRepository,
            one_side::OneSideRepository,
            reference::{DbReferenceGuard, ReferenceGuard},
        },
        error::AppError,
        model::one_side::{CreateOneSideParams, OneSide},
        service::not_found,
    },
};

pub struct OneSideService<'a, G: ReferenceGuard = DbReferenceGuard<'a>> {
    db: &'a DatabaseConnection,
    guard: G,
}

impl<'a> OneSideService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guard: DbReferenceGuard::new(db),
        }
    }
}

impl<'a, G: ReferenceGuard> OneSideService<'a, G> {
    /// Creates a service that consults `guard` instead of the database for reference checks.
    pub fn with_guard(db: &'a DatabaseConnection, guard: G) -> Self {
        Self { db, guard }
    }

    /// Gets all one-side records
    pub async fn get_all(&self) -> Result<Vec<OneSide>, AppError> {
        let repo = OneSideRepository::new(self.db);

        let records = repo.get_all().await?;

        Ok(records.into_iter().map(OneSide::from_entity).collect())
    }

    /// Creates a one-side record under the next free id.
    ///
    /// The id is one more than the current maximum, or 1 for an empty table.
    /// Reading the maximum and inserting are separate statements, so two
    /// concurrent creates can compute the same id; the loser fails on the
    /// primary key and is reported as a bad request. Once the maximum is
    /// `i32::MAX` no further id can be assigned.
    pub async fn create(&self, dto: CreateOneSideDto) -> Result<OneSide, AppError> {
        let params = CreateOneSideParams::from_dto(dto)?;
        let repo = OneSideRepository::new(self.db);

        let id = match repo.max_id().await? {
            Some(max) => max.checked_add(1).ok_or_else(|| {
                AppError::BadRequest(format!("No id left after {} for a new document!", max))
            })?,
            None => 1,
        };
        let record = repo.create(id, params).await?;

        Ok(OneSide::from_entity(record))
    }

    /// Deletes a one-side record that no many-side record references.
    ///
    /// # Returns
    /// - `Ok(())` - Record deleted
    /// - `Err(AppError::Conflict)` - At least one many-side record references `id`
    /// - `Err(AppError::NotFound)` - No record has the given id
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        if self.guard.has_dependents(id).await? {
            return Err(AppError::Conflict(format!(
                "Document with id {} has reference in manySide table!",
                id
            )));
        }

        let repo = OneSideRepository::new(self.db);
        if !repo.delete(id).await? {
            return Err(not_found(id));
        }

        Ok(())
    }

    /// Deletes a one-side record together with every record referencing it.
    ///
    /// Both deletes run in one transaction. An error on either leaves the
    /// transaction uncommitted, so it is rolled back when dropped.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of dependents removed alongside the owner
    /// - `Err(AppError::NotFound)` - No record has the given id; nothing is removed
    pub async fn delete_cascading(&self, id: i32) -> Result<u64, AppError> {
        let txn = self.db.begin().await?;

        let removed = ManySideRepository::new(&txn).delete_by_owner(id).await?;
        if !OneSideRepository::new(&txn).delete(id).await? {
            txn.rollback().await?;
            return Err(not_found(id));
        }

        txn.commit().await?;

        tracing::info!(
            "Deleted one-side record {} with {} dependent record(s)",
            id,
            removed
        );

        Ok(removed)
    }
}
