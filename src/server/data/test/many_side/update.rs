use super::*;

/// Tests a partial update of a single field.
///
/// Verifies that only the supplied field changes.
///
/// Expected: Ok(Some) with new prep time and other fields unchanged
#[tokio::test]
async fn updates_only_supplied_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_one_side(db).await?;
    let original = factory::create_many_side(db, owner.id).await?;

    let repo = ManySideRepository::new(db);
    let updated = repo
        .update(
            original.id,
            UpdateManySideParams {
                prep_time: Some(42.0),
                enum_example: Some(Beverage::Tea),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.prep_time, 42.0);
    assert_eq!(updated.enum_example.as_deref(), Some("Tea"));
    assert_eq!(updated.name, original.name);
    assert_eq!(updated.description, original.description);
    assert_eq!(updated.date_example, original.date_example);

    assert_eq!(entity::prelude::ManySide::find_by_id(original.id).one(db).await?, Some(updated));

    Ok(())
}

/// Tests an update without any supplied field.
///
/// Expected: Ok(Some) with the stored record unchanged
#[tokio::test]
async fn empty_update_returns_stored_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_one_side(db).await?;
    let original = factory::create_many_side(db, owner.id).await?;

    let repo = ManySideRepository::new(db);
    let result = repo
        .update(original.id, UpdateManySideParams::default())
        .await?;

    assert_eq!(result, Some(original));

    Ok(())
}

/// Tests updating an id that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ManySideRepository::new(db);
    let result = repo
        .update(
            999,
            UpdateManySideParams {
                name: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(result.is_none());

    Ok(())
}
