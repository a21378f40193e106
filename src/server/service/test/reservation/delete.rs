use super::*;

/// Tests that deleting a reservation frees its slot.
///
/// Expected: Ok, and the same window can be booked again
#[tokio::test]
async fn delete_frees_slot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;
    let locks = SpaceLocks::new();
    let clock = clock();

    let id = book(db, &locks, owner.id, space.id, at(10, 10, 0), at(10, 11, 0)).await?;

    let service = ReservationService::new(db, &locks, &clock);
    service.delete(&user(owner.id), id).await?;

    assert!(matches!(
        service.get(&user(owner.id), id).await,
        Err(AppError::NotFound(_))
    ));

    book(db, &locks, owner.id, space.id, at(10, 10, 0), at(10, 11, 0)).await?;

    Ok(())
}

/// Tests that another user's reservation cannot be deleted.
///
/// Expected: Err(AccessDenied) and the reservation remains
#[tokio::test]
async fn stranger_cannot_delete() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let owner = factory::create_user(db).await?;
    let stranger = factory::create_user(db).await?;
    let space = factory::create_space(db).await?;
    let locks = SpaceLocks::new();
    let clock = clock();

    let id = book(db, &locks, owner.id, space.id, at(10, 10, 0), at(10, 11, 0)).await?;

    let service = ReservationService::new(db, &locks, &clock);
    let result = service.delete(&user(stranger.id), id).await;

    assert!(matches!(
        result,
        Err(AppError::AuthErr(AuthError::AccessDenied(_, _)))
    ));
    assert!(service.get(&user(owner.id), id).await.is_ok());

    Ok(())
}
