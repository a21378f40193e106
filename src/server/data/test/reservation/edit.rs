use super::*;

/// Tests that an edit writes only the columns it carries.
///
/// The row is cancelled and moved after the caller last saw it; a title edit must leave
/// that newer space, window and status in place.
///
/// Expected: Ok(Some(Reservation)) with the new title and the newer placement
#[tokio::test]
async fn edit_keeps_columns_it_does_not_carry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, existing) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_space = factory::create_space(db).await?;
    let repo = ReservationRepository::new(db);

    repo.update(
        existing.id,
        ReservationChanges {
            space_id: other_space.id,
            title: existing.title.clone(),
            description: existing.description.clone(),
            window: window(at(20, 14, 0), at(20, 15, 0)),
            status: ReservationStatus::Cancelled,
        },
    )
    .await?;

    let edited = repo
        .edit(
            existing.id,
            ReservationEdit {
                title: Some("Renamed".to_string()),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(edited.title, "Renamed");
    assert_eq!(edited.space_id, other_space.id);
    assert_eq!(edited.start_time, at(20, 14, 0));
    assert_eq!(edited.end_time, at(20, 15, 0));
    assert_eq!(edited.status, ReservationStatus::Cancelled);

    Ok(())
}

/// Tests clearing the description with an edit.
///
/// Expected: Ok(Some(Reservation)) without a description
#[tokio::test]
async fn edit_clears_description() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;
    let existing = factory::reservation::ReservationFactory::new(db, user.id, space.id)
        .description(Some("Projector needed".to_string()))
        .build()
        .await?;

    let edited = ReservationRepository::new(db)
        .edit(
            existing.id,
            ReservationEdit {
                description: Some(None),
                ..Default::default()
            },
        )
        .await?
        .unwrap();

    assert_eq!(edited.description, None);
    assert_eq!(edited.title, existing.title);

    Ok(())
}

/// Tests editing a reservation that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn edit_returns_none_for_missing_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let edited = ReservationRepository::new(db)
        .edit(
            42,
            ReservationEdit {
                title: Some("Ghost".to_string()),
                ..Default::default()
            },
        )
        .await?;

    assert!(edited.is_none());

    Ok(())
}
