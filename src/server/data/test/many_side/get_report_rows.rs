use super::*;

/// Tests the join and match stages of the prep time report.
///
/// Verifies that only rows whose owner name contains "alue" (in any case)
/// and whose prep time is at least 10 are returned, paired with the
/// owner name.
///
/// Expected: Ok with the two qualifying rows
#[tokio::test]
async fn filters_by_owner_name_and_prep_time() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let value = factory::one_side::OneSideFactory::new(db)
        .name("Value Foods")
        .build()
        .await?;
    let other = factory::one_side::OneSideFactory::new(db)
        .name("Harbour Grill")
        .build()
        .await?;
    let shouting = factory::one_side::OneSideFactory::new(db)
        .name("BLUE VALUE")
        .build()
        .await?;

    ManySideFactory::new(db, value.id).prep_time(10.0).build().await?;
    ManySideFactory::new(db, value.id).prep_time(9.5).build().await?;
    ManySideFactory::new(db, other.id).prep_time(30.0).build().await?;
    ManySideFactory::new(db, shouting.id).prep_time(20.0).build().await?;

    let repo = ManySideRepository::new(db);
    let mut rows = repo.get_report_rows().await?;
    rows.sort_by(|a, b| a.0.cmp(&b.0));

    assert_eq!(
        rows,
        vec![
            ("BLUE VALUE".to_string(), 20.0),
            ("Value Foods".to_string(), 10.0),
        ]
    );

    Ok(())
}

/// Tests that rows without an owner never reach the report.
///
/// Expected: Ok with empty vector
#[tokio::test]
async fn skips_records_without_owner() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    ManySideFactory::new(db, 4242).prep_time(50.0).build().await?;

    let repo = ManySideRepository::new(db);
    assert!(repo.get_report_rows().await?.is_empty());

    Ok(())
}
