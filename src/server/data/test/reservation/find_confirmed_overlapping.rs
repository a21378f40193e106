use super::*;

/// Tests that an overlapping confirmed reservation is found.
///
/// Expected: Ok(Some(Reservation)) for partial overlap on either side and for containment
#[tokio::test]
async fn finds_overlap_on_same_space() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space, existing) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let repo = ReservationRepository::new(db);

    let start = existing.start_time;
    let end = existing.end_time;
    let half = (end - start) / 2;

    for candidate in [
        window(start - half, start + half),
        window(start + half, end + half),
        window(start - half, end + half),
        window(start, end),
    ] {
        let found = repo
            .find_confirmed_overlapping(space.id, candidate, None)
            .await?;
        assert_eq!(found.map(|r| r.id), Some(existing.id));
    }

    Ok(())
}

/// Tests that touching intervals are not reported as overlaps.
///
/// Verifies that a window ending exactly when the existing reservation starts, or
/// starting exactly when it ends, is free.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_back_to_back_windows() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;
    factory::reservation::ReservationFactory::new(db, user.id, space.id)
        .window(at(10, 10, 0), at(10, 11, 0))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);

    let before = repo
        .find_confirmed_overlapping(space.id, window(at(10, 9, 0), at(10, 10, 0)), None)
        .await?;
    let after = repo
        .find_confirmed_overlapping(space.id, window(at(10, 11, 0), at(10, 12, 0)), None)
        .await?;

    assert!(before.is_none());
    assert!(after.is_none());

    Ok(())
}

/// Tests that only confirmed reservations block a window.
///
/// Expected: Ok(None) when the overlapping reservations are pending or cancelled
#[tokio::test]
async fn ignores_unconfirmed_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;
    for status in ["pending", "cancelled"] {
        factory::reservation::ReservationFactory::new(db, user.id, space.id)
            .window(at(10, 10, 0), at(10, 11, 0))
            .status(status)
            .build()
            .await?;
    }

    let found = ReservationRepository::new(db)
        .find_confirmed_overlapping(space.id, window(at(10, 10, 0), at(10, 11, 0)), None)
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests that reservations on other spaces never conflict.
///
/// Expected: Ok(None)
#[tokio::test]
async fn ignores_other_spaces() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, existing) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let other_space = factory::create_space(db).await?;

    let found = ReservationRepository::new(db)
        .find_confirmed_overlapping(
            other_space.id,
            window(existing.start_time, existing.end_time),
            None,
        )
        .await?;

    assert!(found.is_none());

    Ok(())
}

/// Tests excluding the reservation being moved.
///
/// Verifies that a reservation does not conflict with itself when its own ID is excluded,
/// while another overlapping reservation is still reported.
///
/// Expected: Ok(None) for self only, Ok(Some) once a second booking overlaps
#[tokio::test]
async fn excludes_given_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;
    let own = factory::reservation::ReservationFactory::new(db, user.id, space.id)
        .window(at(10, 10, 0), at(10, 11, 0))
        .build()
        .await?;

    let repo = ReservationRepository::new(db);
    let moved = window(at(10, 10, 30), at(10, 11, 30));

    assert!(repo
        .find_confirmed_overlapping(space.id, moved, Some(own.id))
        .await?
        .is_none());

    let other = factory::reservation::ReservationFactory::new(db, user.id, space.id)
        .window(at(10, 11, 0), at(10, 12, 0))
        .build()
        .await?;

    let found = repo
        .find_confirmed_overlapping(space.id, moved, Some(own.id))
        .await?;
    assert_eq!(found.map(|r| r.id), Some(other.id));

    Ok(())
}

/// Tests that the earliest conflicting reservation is returned.
///
/// Expected: Ok(Some) with the reservation that starts first
#[tokio::test]
async fn returns_earliest_conflict() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;
    factory::reservation::ReservationFactory::new(db, user.id, space.id)
        .window(at(10, 11, 0), at(10, 12, 0))
        .build()
        .await?;
    let earliest = factory::reservation::ReservationFactory::new(db, user.id, space.id)
        .window(at(10, 9, 0), at(10, 10, 0))
        .build()
        .await?;

    let found = ReservationRepository::new(db)
        .find_confirmed_overlapping(space.id, window(at(10, 8, 0), at(10, 13, 0)), None)
        .await?;

    assert_eq!(found.map(|r| r.id), Some(earliest.id));

    Ok(())
}
