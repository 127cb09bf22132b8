//! One-side factory for creating test owner entities.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test one-side records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::one_side::OneSideFactory;
///
/// let owner = OneSideFactory::new(&db)
///     .id(7)
///     .name("Valuable Kitchen")
///     .build()
///     .await?;
/// ```
pub struct OneSideFactory<'a> {
    db: &'a DatabaseConnection,
    id: i32,
    name: String,
    email: String,
}

impl<'a> OneSideFactory<'a> {
    /// Creates a new OneSideFactory with default values.
    ///
    /// Defaults:
    /// - id: next value of the shared test counter
    /// - name: `"Owner {id}"`
    /// - email: `"owner{id}@example.com"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            id: id as i32,
            name: format!("Owner {}", id),
            email: format!("owner{}@example.com", id),
        }
    }

    /// Sets the primary key.
    pub fn id(mut self, id: i32) -> Self {
        self.id = id;
        self
    }

    /// Sets the owner name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the owner email.
    pub fn email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builds and inserts the one-side entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::one_side::Model)` - Created owner
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::one_side::Model, DbErr> {
        entity::one_side::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            email: ActiveValue::Set(self.email),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a one-side record with default values.
///
/// Shorthand for `OneSideFactory::new(db).build().await`.
pub async fn create_one_side(db: &DatabaseConnection) -> Result<entity::one_side::Model, DbErr> {
    OneSideFactory::new(db).build().await
}
