use super::*;

/// Tests replacing every field of a record.
///
/// Expected: Ok(Some) with the replacement stored under the same id
#[tokio::test]
async fn replaces_all_fields() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_one_side(db).await?;
    let new_owner = factory::create_one_side(db).await?;
    let original = factory::create_many_side(db, owner.id).await?;

    let repo = ManySideRepository::new(db);
    let replacement = params("Waffles", new_owner.id);
    let replaced = repo
        .replace(original.id, replacement.clone())
        .await?
        .unwrap();

    assert_eq!(replaced.id, original.id);
    assert_eq!(replaced.name, "Waffles");
    assert_eq!(replaced.fk_neve, new_owner.id);
    assert_eq!(replaced.custom_validator_example, Some(6));
    assert_eq!(replaced.date_example, replacement.date_example);

    assert_eq!(entity::prelude::ManySide::find_by_id(original.id).one(db).await?, Some(replaced));

    Ok(())
}

/// Tests replacing a record with identical values.
///
/// Expected: Ok(None) since nothing was modified
#[tokio::test]
async fn identical_replacement_reports_nothing_modified() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_one_side(db).await?;

    let repo = ManySideRepository::new(db);
    let input = params("Porridge", owner.id);
    let created = repo.create(input.clone()).await?;

    assert!(repo.replace(created.id, input).await?.is_none());
    assert_eq!(entity::prelude::ManySide::find_by_id(created.id).one(db).await?, Some(created));

    Ok(())
}

/// Tests replacing an id that does not exist.
///
/// Expected: Ok(None) and no record inserted
#[tokio::test]
async fn returns_none_for_missing_record() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_one_side(db).await?;

    let repo = ManySideRepository::new(db);
    assert!(repo.replace(999, params("Ghost", owner.id)).await?.is_none());
    assert_eq!(entity::prelude::ManySide::find().count(db).await?, 0);

    Ok(())
}
