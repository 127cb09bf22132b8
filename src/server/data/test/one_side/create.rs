use super::*;

/// Tests inserting a one-side record under an explicit id.
///
/// Verifies that the repository stores the given id alongside the
/// supplied name and email.
///
/// Expected: Ok with record stored under id 1
#[tokio::test]
async fn creates_record_with_given_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OneSideRepository::new(db);
    let created = repo
        .create(
            1,
            CreateOneSideParams {
                name: "Valuable Kitchen".to_string(),
                email: "kitchen@example.com".to_string(),
            },
        )
        .await?;

    assert_eq!(created.id, 1);
    assert_eq!(created.name, "Valuable Kitchen");
    assert_eq!(created.email, "kitchen@example.com");

    let stored = entity::prelude::OneSide::find_by_id(1).one(db).await?;
    assert_eq!(stored, Some(created));

    Ok(())
}

/// Tests inserting a second record under an id already in use.
///
/// Verifies that the primary key rejects the duplicate instead of
/// overwriting the existing record.
///
/// Expected: Err and the original record unchanged
#[tokio::test]
async fn rejects_duplicate_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::one_side::OneSideFactory::new(db).id(5).build().await?;

    let repo = OneSideRepository::new(db);
    let result = repo
        .create(
            5,
            CreateOneSideParams {
                name: "Other".to_string(),
                email: "other@example.com".to_string(),
            },
        )
        .await;

    assert!(result.is_err());
    assert_eq!(entity::prelude::OneSide::find_by_id(5).one(db).await?, Some(existing));

    Ok(())
}
