//! Shared helper utilities for factory methods.

use sea_orm::{DatabaseConnection, DbErr};

/// Counter for generating unique values in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a one-side record and `count` many-side records referencing it.
///
/// All entities are created with default values. Use the individual
/// factories if you need to customize specific entities.
///
/// # Arguments
/// - `db` - Database connection
/// - `count` - Number of dependents to create
///
/// # Returns
/// - `Ok((owner, dependents))` - The owner and its dependents in creation order
/// - `Err(DbErr)` - Database error during creation
pub async fn create_owner_with_dependents(
    db: &DatabaseConnection,
    count: usize,
) -> Result<(entity::one_side::Model, Vec<entity::many_side::Model>), DbErr> {
    let owner = crate::factory::one_side::create_one_side(db).await?;

    let mut dependents = Vec::with_capacity(count);
    for _ in 0..count {
        dependents.push(crate::factory::many_side::create_many_side(db, owner.id).await?);
    }

    Ok((owner, dependents))
}
