//! Factory methods for creating test data.
//!
//! Factories insert rows with values that pass every schema rule, so tests only
//! spell out the fields they care about.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let owner = factory::create_one_side(&db).await?;
//!     let recipe = factory::create_many_side(&db, owner.id).await?;
//!
//!     // Create an owner together with dependents
//!     let (owner, recipes) = factory::helpers::create_owner_with_dependents(&db, 3).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let recipe = factory::many_side::ManySideFactory::new(&db, owner.id)
//!     .name("Pancakes")
//!     .prep_time(25.0)
//!     .build()
//!     .await?;
//! ```

pub mod helpers;
pub mod many_side;
pub mod one_side;

// Re-export commonly used factory functions for concise usage
pub use many_side::create_many_side;
pub use one_side::create_one_side;
