use super::*;

/// Tests hard-deleting a reservation.
///
/// Expected: Ok(true) on first delete, Ok(false) afterwards, and the row is gone
#[tokio::test]
async fn deletes_reservation() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, existing) = factory::helpers::create_reservation_with_dependencies(db).await?;
    let repo = ReservationRepository::new(db);

    assert!(repo.delete(existing.id).await?);
    assert!(!repo.delete(existing.id).await?);
    assert!(repo.find_by_id(existing.id).await?.is_none());

    Ok(())
}
