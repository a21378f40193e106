use super::*;

/// Tests that deleting a user cascades to their reservations.
///
/// Expected: Ok(true) and the user's reservation is gone
#[tokio::test]
async fn deletes_user_and_reservations() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (user, _, reservation) =
        factory::helpers::create_reservation_with_dependencies(db).await?;

    assert!(UserRepository::new(db).delete(user.id).await?);

    let remaining = crate::server::data::reservation::ReservationRepository::new(db)
        .find_by_id(reservation.id)
        .await?;
    assert!(remaining.is_none());

    Ok(())
}

/// Tests deleting a user that does not exist.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_missing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::User)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(!UserRepository::new(db).delete(1).await?);

    Ok(())
}
