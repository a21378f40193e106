use super::*;

/// Tests a partial update.
///
/// Verifies that only the provided columns change.
///
/// Expected: Ok(Some(User)) with new name and role, original email
#[tokio::test]
async fn updates_only_given_columns() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let existing = factory::create_user(db).await?;

    let updated = UserRepository::new(db)
        .update(
            existing.id,
            UserChanges {
                name: Some("Renamed".to_string()),
                role: Some(Role::Admin),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(updated.name, "Renamed");
    assert_eq!(updated.email, existing.email);
    assert_eq!(updated.role, Role::Admin);

    Ok(())
}

/// Tests updating a user that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let result = UserRepository::new(db)
        .update(7, UserChanges::default())
        .await?;

    assert!(result.is_none());

    Ok(())
}
