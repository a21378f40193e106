use super::*;
use crate::server::{
    data::reservation::ReservationRepository,
    model::reservation::{NewReservationRecord, ReservationChanges, TimeWindow},
};
use tokio::task::JoinSet;

const CONTENDERS: usize = 8;

/// Tests racing bookings for the same slot.
///
/// Spawns several concurrent requests for an identical window on one space from different
/// users. Exactly one must win; every other request must see the winner as its conflict.
///
/// Expected: 1 success and CONTENDERS - 1 scheduling conflicts
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_identical_bookings_admit_one() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let space = factory::create_space(&db).await?;
    let mut owners = Vec::new();
    for _ in 0..CONTENDERS {
        owners.push(factory::create_user(&db).await?.id);
    }
    let locks = SpaceLocks::new();

    let mut tasks = JoinSet::new();
    for owner in owners {
        let db = db.clone();
        let locks = locks.clone();
        let space_id = space.id;
        tasks.spawn(async move {
            book(&db, &locks, owner, space_id, at(10, 10, 0), at(10, 11, 0)).await
        });
    }

    let mut winners = Vec::new();
    let mut conflicts = Vec::new();
    while let Some(joined) = tasks.join_next().await {
        match joined.unwrap() {
            Ok(id) => winners.push(id),
            Err(AppError::ReservationErr(ReservationError::SchedulingConflict(conflicting))) => {
                conflicts.push(conflicting.id)
            }
            Err(other) => panic!("unexpected error: {:?}", other),
        }
    }

    assert_eq!(winners.len(), 1);
    assert_eq!(conflicts.len(), CONTENDERS - 1);
    assert!(conflicts.iter().all(|id| *id == winners[0]));

    Ok(())
}

/// Tests racing bookings for different spaces.
///
/// Verifies that the per-space locks do not turn independent bookings into conflicts.
///
/// Expected: every booking succeeds
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn concurrent_bookings_on_distinct_spaces_all_succeed() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let owner = factory::create_user(&db).await?;
    let mut spaces = Vec::new();
    for _ in 0..CONTENDERS {
        spaces.push(factory::create_space(&db).await?.id);
    }
    let locks = SpaceLocks::new();

    let mut tasks = JoinSet::new();
    for space_id in spaces {
        let db = db.clone();
        let locks = locks.clone();
        let owner_id = owner.id;
        tasks.spawn(async move {
            book(&db, &locks, owner_id, space_id, at(10, 10, 0), at(10, 11, 0)).await
        });
    }

    while let Some(joined) = tasks.join_next().await {
        assert!(joined.unwrap().is_ok());
    }

    Ok(())
}

/// Tests an update that waited on the space lock while the reservation changed underneath.
///
/// The update reads the reservation while it is still confirmed, then waits on the lock.
/// Meanwhile the reservation is cancelled and its slot booked by someone else. Once the
/// lock is released the update must decide from the reservation as stored now, so
/// confirming it again collides with the new booking instead of overwriting the cancel.
///
/// Expected: Err(SchedulingConflict) naming the new booking, the reservation stays cancelled
#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn update_decides_from_reservation_read_under_lock() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_reservation_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.clone().unwrap();

    let owner = factory::create_user(&db).await?;
    let rival = factory::create_user(&db).await?;
    let space = factory::create_space(&db).await?;
    let locks = SpaceLocks::new();

    let id = book(&db, &locks, owner.id, space.id, at(10, 10, 0), at(10, 11, 0)).await?;

    let held = locks.acquire(space.id).await;
    let pending = tokio::spawn({
        let db = db.clone();
        let locks = locks.clone();
        let owner_id = owner.id;
        async move {
            let clock = clock();
            ReservationService::new(&db, &locks, &clock)
                .update(
                    &user(owner_id),
                    id,
                    UpdateReservationParam {
                        title: Some("Renamed".to_string()),
                        status: Some(ReservationStatus::Confirmed),
                        ..Default::default()
                    },
                )
                .await
        }
    });
    tokio::time::sleep(std::time::Duration::from_millis(100)).await;

    let repo = ReservationRepository::new(&db);
    let stored = repo.find_by_id(id).await?.unwrap();
    repo.update(
        id,
        ReservationChanges {
            space_id: stored.space_id,
            title: stored.title.clone(),
            description: stored.description.clone(),
            window: TimeWindow::new(stored.start_time, stored.end_time).unwrap(),
            status: ReservationStatus::Cancelled,
        },
    )
    .await?;
    let rebooked = repo
        .create(NewReservationRecord {
            user_id: rival.id,
            space_id: space.id,
            title: "Rival sync".to_string(),
            description: None,
            window: TimeWindow::new(at(10, 10, 0), at(10, 11, 0)).unwrap(),
            status: ReservationStatus::Confirmed,
        })
        .await?;
    drop(held);

    assert_conflict_with(pending.await.unwrap(), rebooked.id);

    let after = repo.find_by_id(id).await?.unwrap();
    assert_eq!(after.status, ReservationStatus::Cancelled);
    assert_eq!(after.title, stored.title);

    Ok(())
}
