use super::*;

/// Tests purging expired tokens.
///
/// Expected: Ok(1), with the live token still resolving
#[tokio::test]
async fn removes_only_expired_tokens() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let now = Utc.with_ymd_and_hms(2030, 1, 1, 12, 0, 0).unwrap();
    let user = factory::create_user(db).await?;
    factory::access_token::AccessTokenFactory::new(db, user.id)
        .token("old")
        .expires_at(now - Duration::minutes(1))
        .build()
        .await?;
    factory::access_token::AccessTokenFactory::new(db, user.id)
        .token("fresh")
        .expires_at(now + Duration::hours(1))
        .build()
        .await?;

    let repo = AccessTokenRepository::new(db);

    assert_eq!(repo.delete_expired(now).await?, 1);
    assert!(repo.find_user_by_active_token("fresh", now).await?.is_some());

    Ok(())
}
