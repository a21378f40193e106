use super::*;

/// Tests resolving a live token to its owner.
///
/// Expected: Ok(Some(User)) before expiry, Ok(None) at or after expiry
#[tokio::test]
async fn resolves_until_expiry() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap();
    let user = factory::create_user(db).await?;
    factory::access_token::AccessTokenFactory::new(db, user.id)
        .token("live-token")
        .expires_at(now + Duration::hours(1))
        .build()
        .await?;

    let repo = AccessTokenRepository::new(db);

    let found = repo.find_user_by_active_token("live-token", now).await?;
    assert_eq!(found.map(|u| u.id), Some(user.id));

    let expired = repo
        .find_user_by_active_token("live-token", now + Duration::hours(1))
        .await?;
    assert!(expired.is_none());

    assert!(repo
        .find_user_by_active_token("unknown", now)
        .await?
        .is_none());

    Ok(())
}

/// Tests that a revoked token no longer resolves.
///
/// Expected: Ok(true) from delete, then Ok(None)
#[tokio::test]
async fn revoked_token_is_rejected() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap();
    let user = factory::create_user(db).await?;
    factory::access_token::AccessTokenFactory::new(db, user.id)
        .token("revoke-me")
        .expires_at(now + Duration::hours(1))
        .build()
        .await?;

    let repo = AccessTokenRepository::new(db);

    assert!(repo.delete_by_token("revoke-me").await?);
    assert!(repo
        .find_user_by_active_token("revoke-me", now)
        .await?
        .is_none());

    Ok(())
}
