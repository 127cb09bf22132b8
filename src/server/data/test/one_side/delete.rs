use super::*;

/// Tests deleting an existing one-side record.
///
/// Expected: Ok(true) and the record no longer retrievable
#[tokio::test]
async fn deletes_existing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_one_side(db).await?;

    let repo = OneSideRepository::new(db);
    assert!(repo.delete(owner.id).await?);
    assert!(entity::prelude::OneSide::find_by_id(owner.id).one(db).await?.is_none());
    assert!(!repo.exists(owner.id).await?);

    Ok(())
}

/// Tests deleting an id that was never inserted.
///
/// Expected: Ok(false) with no rows removed
#[tokio::test]
async fn returns_false_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_one_side(db).await?;

    let repo = OneSideRepository::new(db);
    assert!(!repo.delete(owner.id + 1000).await?);

    let count = entity::prelude::OneSide::find().count(db).await?;
    assert_eq!(count, 1);

    Ok(())
}

/// Tests that the repository itself does not guard references.
///
/// The store holds no foreign key, so deleting an owner with dependents
/// succeeds at this layer and leaves the dependents behind.
///
/// Expected: Ok(true) with the dependent still stored
#[tokio::test]
async fn leaves_dependents_in_place() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (owner, dependents) = factory::helpers::create_owner_with_dependents(db, 1).await?;

    let repo = OneSideRepository::new(db);
    assert!(repo.delete(owner.id).await?);

    let dependent = entity::prelude::ManySide::find_by_id(dependents[0].id)
        .one(db)
        .await?;
    assert!(dependent.is_some());

    Ok(())
}
