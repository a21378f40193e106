use super::*;

/// Tests that a user's list only contains their reservations, with details expanded.
///
/// Expected: Ok(Vec) of the requester's reservations in start order
#[tokio::test]
async fn lists_own_reservations_with_details() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let other = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;
    let locks = SpaceLocks::new();
    let clock = clock();

    let late = book(db, &locks, owner.id, space.id, at(11, 10, 0), at(11, 11, 0)).await?;
    let early = book(db, &locks, owner.id, space.id, at(10, 10, 0), at(10, 11, 0)).await?;
    book(db, &locks, other.id, space.id, at(12, 10, 0), at(12, 11, 0)).await?;

    let list = ReservationService::new(db, &locks, &clock)
        .list(&user(owner.id), ReservationFilter::default())
        .await?;

    let ids: Vec<i32> = list.iter().map(|d| d.reservation.id).collect();
    assert_eq!(ids, vec![early, late]);
    assert!(list.iter().all(|d| d.space.is_some() && d.user.is_some()));

    Ok(())
}
