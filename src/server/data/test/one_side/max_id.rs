use super::*;

/// Tests the highest id lookup on an empty table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_one_many_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OneSideRepository::new(db);
    assert_eq!(repo.max_id().await?, None);

    Ok(())
}

/// Tests the highest id lookup with gaps in the id sequence.
///
/// Verifies that the lookup returns the largest id rather than the most
/// recently inserted one.
///
/// Expected: Ok(Some(40))
#[tokio::test]
async fn returns_largest_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_one_many_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for id in [3, 40, 12] {
        factory::one_side::OneSideFactory::new(db).id(id).build().await?;
    }

    let repo = OneSideRepository::new(db);
    assert_eq!(repo.max_id().await?, Some(40));

    Ok(())
}
