use super::*;

/// Tests that users only see their own reservations, ordered by start time.
///
/// Expected: Ok(Vec) with the requester's reservations in start order
#[tokio::test]
async fn lists_only_own_reservations_in_start_order() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;

    let later = factory::reservation::ReservationFactory::new(db, owner.id, space.id)
        .window(at(12, 9, 0), at(12, 10, 0))
        .build()
        .await?;
    let earlier = factory::reservation::ReservationFactory::new(db, owner.id, space.id)
        .window(at(11, 9, 0), at(11, 10, 0))
        .build()
        .await?;
    factory::reservation::ReservationFactory::new(db, other.id, space.id)
        .window(at(11, 11, 0), at(11, 12, 0))
        .build()
        .await?;

    let reservations = ReservationRepository::new(db)
        .list_for_user(owner.id, ReservationFilter::default())
        .await?;

    let ids: Vec<i32> = reservations.iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![earlier.id, later.id]);

    Ok(())
}

/// Tests the space, status and date range filters.
///
/// Expected: Ok(Vec) containing only reservations matching every filter
#[tokio::test]
async fn applies_filters() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let user = factory::create_user(db).await?;
    let room = factory::create_space(db).await?;
    let desk = factory::create_space(db).await?;

    let matching = factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .window(at(11, 9, 0), at(11, 10, 0))
        .build()
        .await?;
    // Other space
    factory::reservation::ReservationFactory::new(db, user.id, desk.id)
        .window(at(11, 9, 0), at(11, 10, 0))
        .build()
        .await?;
    // Cancelled
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .window(at(11, 12, 0), at(11, 13, 0))
        .status("cancelled")
        .build()
        .await?;
    // Outside the range
    factory::reservation::ReservationFactory::new(db, user.id, room.id)
        .window(at(14, 9, 0), at(14, 10, 0))
        .build()
        .await?;

    let reservations = ReservationRepository::new(db)
        .list_for_user(
            user.id,
            ReservationFilter {
                space_id: Some(room.id),
                range: Some(days(10, 12)),
                status: Some(ReservationStatus::Confirmed),
            },
        )
        .await?;

    assert_eq!(reservations.len(), 1);
    assert_eq!(reservations[0].id, matching.id);

    Ok(())
}
