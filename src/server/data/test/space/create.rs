use super::*;

/// Tests creating a space.
///
/// Expected: Ok(Space) with every field stored
#[tokio::test]
async fn creates_space() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Space)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = SpaceRepository::new(db);
    let space = repo
        .create(CreateSpaceParam {
            name: "Boardroom".to_string(),
            description: Some("Third floor".to_string()),
            capacity: 12,
            location: Some("HQ".to_string()),
            is_active: true,
        })
        .await?;

    assert_eq!(space.name, "Boardroom");
    assert_eq!(space.capacity, 12);
    assert_eq!(space.location.as_deref(), Some("HQ"));
    assert!(space.is_active);
    assert_eq!(repo.find_by_id(space.id).await?, Some(space));

    Ok(())
}
