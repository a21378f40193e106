use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Space::Table)
                    .if_not_exists()
                    .col(pk_auto(Space::Id))
                    .col(string(Space::Name))
                    .col(text_null(Space::Description))
                    .col(integer(Space::Capacity))
                    .col(string_null(Space::Location))
                    .col(boolean(Space::IsActive).default(true))
                    .col(
                        timestamp_with_time_zone(Space::CreatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .col(
                        timestamp_with_time_zone(Space::UpdatedAt)
                            .default(Expr::current_timestamp())
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Space::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum Space {
    Table,
    Id,
    Name,
    Description,
    Capacity,
    Location,
    IsActive,
    CreatedAt,
    UpdatedAt,
}
