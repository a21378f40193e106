use super::*;

/// Tests deactivating a space through a partial update.
///
/// Expected: Ok(Some(Space)) with `is_active` false and other fields unchanged
#[tokio::test]
async fn deactivates_space() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Space)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_space(db).await?;

    let updated = SpaceRepository::new(db)
        .update(
            existing.id,
            UpdateSpaceParam {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert!(!updated.is_active);
    assert_eq!(updated.name, existing.name);
    assert_eq!(updated.capacity, existing.capacity);

    Ok(())
}

/// Tests updating a space that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_space() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Space)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = SpaceRepository::new(db)
        .update(3, UpdateSpaceParam::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
