use super::*;

/// Tests that deleting a space cascades to its reservations.
///
/// Expected: Ok(true) and the reservation is gone
#[tokio::test]
async fn deletes_space_and_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, space, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    assert!(SpaceRepository::new(db).delete(space.id).await?);
    assert!(SpaceRepository::new(db).find_by_id(space.id).await?.is_none());

    let remaining = crate::server::data::reservation::ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}
