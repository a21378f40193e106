use super::*;

/// Tests that the calendar returns confirmed reservations of every user.
///
/// Verifies that reservations of different owners are included and that pending and
/// cancelled reservations are left out.
///
/// Expected: Ok(Vec) with confirmed reservations only
#[tokio::test]
async fn lists_confirmed_reservations_of_all_users() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let alice = factory::create_user(db).await?;
    let bob = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;

    let first = factory::reservation::ReservationFactory::new(db, alice.id, space.id)
        .window(at(10, 9, 0), at(10, 10, 0))
        .build()
        .await?;
    let second = factory::reservation::ReservationFactory::new(db, bob.id, space.id)
        .window(at(10, 10, 0), at(10, 11, 0))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, bob.id, space.id)
        .window(at(10, 12, 0), at(10, 13, 0))
        .status("pending")
        .build()
        .await?;

    let reservations = ReservationRepository::new(db)
        .list_confirmed_in_range(days(10, 10), None)
        .await?;

    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![first.id, second.id]);

    Ok(())
}

/// Tests the day range boundaries.
///
/// Verifies that a reservation spanning midnight into the range is included, while one
/// ending exactly at the start of the first day or starting at the end of the last day
/// is not.
///
/// Expected: Ok(Vec) containing only the reservation that intersects the range
#[tokio::test]
async fn uses_half_open_day_range() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;

    // Ends exactly at 2030-01-10 00:00
    factory::reservation::ReservationFactory::new(db, user.id, space.id)
        .window(at(9, 22, 0), at(10, 0, 0))
        .build()
        .await?;
    let spanning = factory::reservation::ReservationFactory::new(db, user.id, space.id)
        .window(at(10, 23, 0), at(11, 1, 0))
        .build()
        .await?;
    // Starts exactly at 2030-01-12 00:00
    factory::reservation::ReservationFactory::new(db, user.id, space.id)
        .window(at(12, 0, 0), at(12, 1, 0))
        .build()
        .await?;

    let reservations = ReservationRepository::new(db)
        .list_confirmed_in_range(days(10, 11), None)
        .await?;

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, spanning.id);

    Ok(())
}

/// Tests filtering the calendar by space.
///
/// Expected: Ok(Vec) with reservations of the requested space only
#[tokio::test]
async fn filters_by_space() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_space(db).await?;
    let desk = factory::create_space(db).await?;

    let wanted = factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .window(at(10, 9, 0), at(10, 10, 0))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, user.id, desk.id)
        .window(at(10, 9, 0), at(10, 10, 0))
        .build()
        .await?;

    let reservations = ReservationRepository::new(db)
        .list_confirmed_in_range(days(10, 10), Some(room.id))
        .await?;

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, wanted.id);

    Ok(())
}
