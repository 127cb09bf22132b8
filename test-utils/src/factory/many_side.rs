//! Many-side factory for creating test dependent entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Duration, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test many-side records with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::many_side::ManySideFactory;
///
/// let recipe = ManySideFactory::new(&db, owner.id)
///     .name("Pancakes")
///     .description("Fluffy breakfast pancakes")
///     .build()
///     .await?;
/// ```
pub struct ManySideFactory<'a> {
    db: &'a DatabaseConnection,
    fk_neve: i32,
    name: String,
    description: String,
    prep_time: f64,
    is_gluten_free: bool,
    enum_example: Option<String>,
    min_max_example: i32,
    custom_validator_example: Option<i32>,
    date_example: DateTime<Utc>,
}

impl<'a> ManySideFactory<'a> {
    /// Creates a new ManySideFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Recipe {id}"` where id is auto-incremented
    /// - description: `"Default description for recipe {id}"`
    /// - prep_time: `12.0`
    /// - is_gluten_free: `false`
    /// - enum_example: `Some("Coffee")`
    /// - min_max_example: `3`
    /// - custom_validator_example: `Some(2)`
    /// - date_example: 1 day from now
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    /// - `fk_neve` - Id of the referenced one-side record
    pub fn new(db: &'a DatabaseConnection, fk_neve: i32) -> Self {
        let id = next_id();
        Self {
            db,
            fk_neve,
            name: format!("Recipe {}", id),
            description: format!("Default description for recipe {}", id),
            prep_time: 12.0,
            is_gluten_free: false,
            enum_example: Some("Coffee".to_string()),
            min_max_example: 3,
            custom_validator_example: Some(2),
            date_example: Utc::now() + Duration::days(1),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn prep_time(mut self, prep_time: f64) -> Self {
        self.prep_time = prep_time;
        self
    }

    pub fn is_gluten_free(mut self, is_gluten_free: bool) -> Self {
        self.is_gluten_free = is_gluten_free;
        self
    }

    pub fn enum_example(mut self, enum_example: Option<String>) -> Self {
        self.enum_example = enum_example;
        self
    }

    pub fn min_max_example(mut self, min_max_example: i32) -> Self {
        self.min_max_example = min_max_example;
        self
    }

    pub fn custom_validator_example(mut self, custom_validator_example: Option<i32>) -> Self {
        self.custom_validator_example = custom_validator_example;
        self
    }

    pub fn date_example(mut self, date_example: DateTime<Utc>) -> Self {
        self.date_example = date_example;
        self
    }

    /// Builds and inserts the many-side entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::many_side::Model)` - Created record with its database-assigned id
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::many_side::Model, DbErr> {
        entity::many_side::ActiveModel {
            id: ActiveValue::NotSet,
            name: ActiveValue::Set(self.name),
            description: ActiveValue::Set(self.description),
            prep_time: ActiveValue::Set(self.prep_time),
            is_gluten_free: ActiveValue::Set(self.is_gluten_free),
            enum_example: ActiveValue::Set(self.enum_example),
            min_max_example: ActiveValue::Set(self.min_max_example),
            custom_validator_example: ActiveValue::Set(self.custom_validator_example),
            date_example: ActiveValue::Set(self.date_example),
            fk_neve: ActiveValue::Set(self.fk_neve),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a many-side record with default values referencing `fk_neve`.
///
/// Shorthand for `ManySideFactory::new(db, fk_neve).build().await`.
pub async fn create_many_side(
    db: &DatabaseConnection,
    fk_neve: i32,
) -> Result<entity::many_side::Model, DbErr> {
    ManySideFactory::new(db, fk_neve).build().await
}
