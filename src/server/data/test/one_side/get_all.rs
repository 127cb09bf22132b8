use super::*;

/// Tests listing one-side records.
///
/// Verifies that records come back ordered by id regardless of the
/// order they were inserted in.
///
/// Expected: Ok with ids [2, 7, 9]
#[tokio::test]
async fn returns_records_ordered_by_id() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_one_many_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    for id in [9, 2, 7] {
        factory::one_side::OneSideFactory::new(db).id(id).build().await?;
    }

    let repo = OneSideRepository::new(db);
    let records = repo.get_all().await?;

    let ids: Vec<i32> = records.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![2, 7, 9]);

    Ok(())
}

/// Tests listing an empty table.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn returns_empty_for_empty_table() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_one_many_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = OneSideRepository::new(db);
    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
