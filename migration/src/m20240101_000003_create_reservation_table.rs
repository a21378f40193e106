use sea_orm_migration::{prelude::*, schema::*};

use super::{m20240101_000001_create_user_table::User, m20240101_000002_create_space_table::Space};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Reservation::Table)
                    .if_not_exists()
                    .col(pk_auto(Reservation::Id))
                    .col(integer(Reservation::UserId))
                    .col(integer(Reservation::SpaceId))
                    .col(string(Reservation::Title))
                    .col(text_null(Reservation::Description))
                    .col(timestamp_with_time_zone(Reservation::StartTime))
                    .col(timestamp_with_time_zone(Reservation::EndTime))
                    .col(string(Reservation::Status).default("pending"))
                    .col(
                        timestamp_with_time_zone(Reservation::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Reservation::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_user_id")
                            .from(Reservation::Table, Reservation::UserId)
                            .to(User::Table, User::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_reservation_space_id")
                            .from(Reservation::Table, Reservation::SpaceId)
                            .to(Space::Table, Space::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Overlap checks run on every write and filter on all three columns.
        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservation_space_window")
                    .table(Reservation::Table)
                    .col(Reservation::SpaceId)
                    .col(Reservation::StartTime)
                    .col(Reservation::EndTime)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx_reservation_user_start")
                    .table(Reservation::Table)
                    .col(Reservation::UserId)
                    .col(Reservation::StartTime)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Reservation::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Reservation {
    Table,
    Id,
    UserId,
    SpaceId,
    Title,
    Description,
    StartTime,
    EndTime,
    Status,
    CreatedAt,
    UpdatedAt,
}
