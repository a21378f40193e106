use super::*;

/// Tests inserting a reservation.
///
/// Verifies that the repository stores every column of the record and returns the
/// domain model with the parsed status.
///
/// Expected: Ok(Reservation) with matching fields
#[tokio::test]
async fn creates_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;

    let repo = ReservationRepository::new(db);
    let reservation = repo
        .create(NewReservationRecord {
            user_id: user.id,
            space_id: space.id,
            title: "Sprint planning".to_string(),
            description: Some("Room with the big screen".to_string()),
            window: window(at(10, 9, 0), at(10, 10, 0)),
            status: ReservationStatus::Confirmed,
        })
        .await?;

    assert_eq!(reservation.user_id, user.id);
    assert_eq!(reservation.space_id, space.id);
    assert_eq!(reservation.title, "Sprint planning");
    assert_eq!(
        reservation.description.as_deref(),
        Some("Room with the big screen")
    );
    assert_eq!(reservation.start_time, at(10, 9, 0));
    assert_eq!(reservation.end_time, at(10, 10, 0));
    assert_eq!(reservation.status, ReservationStatus::Confirmed);

    let stored = repo.find_by_id(reservation.id).await?;
    assert_eq!(stored, Some(reservation));

    Ok(())
}

/// Tests inserting a reservation for a space that does not exist.
///
/// Verifies that the foreign key on `space_id` rejects the insert.
///
/// Expected: Err(AppError::DbErr)
#[tokio::test]
async fn fails_for_unknown_space() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;

    let result = ReservationRepository::new(db)
        .create(NewReservationRecord {
            user_id: user.id,
            space_id: 999,
            title: "Orphan".to_string(),
            description: None,
            window: window(at(10, 9, 0), at(10, 10, 0)),
            status: ReservationStatus::Confirmed,
        })
        .await;

    assert!(matches!(result, Err(AppError::DbErr(_))));

    Ok(())
}
