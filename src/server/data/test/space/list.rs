use super::*;

/// Tests listing spaces with and without the active filter.
///
/// Expected: All spaces ordered by ID, or only the matching ones when filtered
#[tokio::test]
async fn filters_by_active_flag() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::Space)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let open = factory::create_space(db).await?;
    let closed = factory::space::SpaceFactory::new(db)
        .active(false)
        .build()
        .await?;
    let repo = SpaceRepository::new(db);

    let all: Vec<i32> = repo
        .list(SpaceFilter::default())
        .await?
        .iter()
        .map(|s| s.id)
        .collect();
    assert_eq!(all, vec![open.id, closed.id]);

    let active = repo
        .list(SpaceFilter {
            is_active: Some(true),
        })
        .await?;
    assert_eq!(active.len(), 1);
    assert_eq!(active[0].id, open.id);

    let inactive = repo
        .list(SpaceFilter {
            is_active: Some(false),
        })
        .await?;
    assert_eq!(inactive.len(), 1);
    assert_eq!(inactive[0].id, closed.id);

    Ok(())
}
