use super::*;

/// Inserts records named "Dish A".."Dish E" with prep times 50, 40, 30, 20, 10.
async fn seed(db: &sea_orm::DatabaseConnection) -> Result<(), DbErr> {
    let owner = factory::create_one_side(db).await?;
    for (i, letter) in ["A", "B", "C", "D", "E"].iter().enumerate() {
        ManySideFactory::new(db, owner.id)
            .name(format!("Dish {}", letter))
            .prep_time(50.0 - 10.0 * i as f64)
            .build()
            .await?;
    }
    Ok(())
}

fn names(records: &[entity::many_side::Model]) -> Vec<&str> {
    records.iter().map(|r| r.name.as_str()).collect()
}

/// Tests paging through records sorted ascending.
///
/// Verifies that the offset and limit select the expected window and
/// that the total counts the whole set, not the page.
///
/// Expected: Ok with 2 records and total 5
#[tokio::test]
async fn returns_requested_window_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ManySideRepository::new(db);
    let query = ManySidePageQuery::new(1, 2, ManySideSort::parse("prepTime").unwrap(), None);
    let (records, total) = repo.get_paginated(&query).await?;

    assert_eq!(names(&records), vec!["Dish D", "Dish C"]);
    assert_eq!(total, 5);

    Ok(())
}

/// Tests descending sort.
///
/// Expected: Ok with records ordered by name descending
#[tokio::test]
async fn sorts_descending_with_minus_prefix() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ManySideRepository::new(db);
    let query = ManySidePageQuery::new(0, 3, ManySideSort::parse("-name").unwrap(), None);
    let (records, _) = repo.get_paginated(&query).await?;

    assert_eq!(names(&records), vec!["Dish E", "Dish D", "Dish C"]);

    Ok(())
}

/// Tests that a limit of 0 returns everything from the offset on.
///
/// Expected: Ok with the last 3 of 5 records
#[tokio::test]
async fn zero_limit_is_unlimited() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ManySideRepository::new(db);
    let query = ManySidePageQuery::new(2, 0, ManySideSort::parse("name").unwrap(), None);
    let (records, total) = repo.get_paginated(&query).await?;

    assert_eq!(names(&records), vec!["Dish C", "Dish D", "Dish E"]);
    assert_eq!(total, 5);

    Ok(())
}

/// Tests filtering by a substring of name or description.
///
/// Verifies that the total reflects the filtered set.
///
/// Expected: Ok with the single matching record and total 1
#[tokio::test]
async fn filter_narrows_records_and_total() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ManySideRepository::new(db);
    let query = ManySidePageQuery::new(
        0,
        10,
        ManySideSort::parse("name").unwrap(),
        Some("dish c".to_string()),
    );
    let (records, total) = repo.get_paginated(&query).await?;

    assert_eq!(names(&records), vec!["Dish C"]);
    assert_eq!(total, 1);

    Ok(())
}

/// Tests an offset past the end of the set.
///
/// Expected: Ok with no records and the full total
#[tokio::test]
async fn offset_past_end_returns_empty_page() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ManySideRepository::new(db);
    let query = ManySidePageQuery::new(10, 2, ManySideSort::parse("name").unwrap(), None);
    let (records, total) = repo.get_paginated(&query).await?;

    assert!(records.is_empty());
    assert_eq!(total, 5);

    Ok(())
}

/// Tests a filter made of SQL wildcard characters.
///
/// Verifies that neither the page nor the total counts records that do not
/// literally contain the filter.
///
/// Expected: Ok with no records and total 0 for `%` and `_`
#[tokio::test]
async fn filter_treats_wildcards_literally() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let repo = ManySideRepository::new(db);
    for filter in ["%", "_"] {
        let query = ManySidePageQuery::new(
            0,
            10,
            ManySideSort::parse("name").unwrap(),
            Some(filter.to_string()),
        );
        let (records, total) = repo.get_paginated(&query).await?;

        assert!(records.is_empty());
        assert_eq!(total, 0);
    }

    Ok(())
}

/// Tests a filtered page with non-ASCII case folding, offset and limit.
///
/// Expected: Ok with the second of three matching records and total 3
#[tokio::test]
async fn filter_folds_accented_letters_before_paging() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();
    seed(db).await?;

    let owner = factory::create_one_side(db).await?;
    for name in ["Gulyás 1", "GULYÁS 2", "gulyás 3"] {
        ManySideFactory::new(db, owner.id).name(name).build().await?;
    }

    let repo = ManySideRepository::new(db);
    let query = ManySidePageQuery::new(
        1,
        1,
        ManySideSort::parse("id").unwrap(),
        Some("GULYÁS".to_string()),
    );
    let (records, total) = repo.get_paginated(&query).await?;

    assert_eq!(names(&records), vec!["GULYÁS 2"]);
    assert_eq!(total, 3);

    Ok(())
}

/// Tests sorting on a non-text field.
///
/// Verifies that records come back ordered by `minMaxExample` with the
/// remaining fields stored as built.
///
/// Expected: Ok with records ordered 1, 2, 3
#[tokio::test]
async fn sorts_by_min_max_example() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_migrations().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_one_side(db).await?;
    let date = Utc::now() + Duration::days(30);
    for (name, value) in [("Third", 3), ("First", 1), ("Second", 2)] {
        ManySideFactory::new(db, owner.id)
            .name(name)
            .min_max_example(value)
            .is_gluten_free(value % 2 == 0)
            .enum_example(Some("Coffee".to_string()))
            .custom_validator_example(Some(value * 2))
            .date_example(date)
            .build()
            .await?;
    }

    let repo = ManySideRepository::new(db);
    let query = ManySidePageQuery::new(0, 0, ManySideSort::parse("minMaxExample").unwrap(), None);
    let (records, total) = repo.get_paginated(&query).await?;

    assert_eq!(names(&records), vec!["First", "Second", "Third"]);
    assert_eq!(total, 3);
    assert_eq!(records[1].min_max_example, 2);
    assert!(records[1].is_gluten_free);
    assert!(!records[0].is_gluten_free);
    assert_eq!(records[2].enum_example.as_deref(), Some("Coffee"));
    assert_eq!(records[2].custom_validator_example, Some(6));
    assert_eq!(records[0].date_example, date);

    Ok(())
}
