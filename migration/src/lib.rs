pub use sea_orm_migration::prelude::*;

mod m20240101_000001_create_user_table;
mod m20240101_000002_create_space_table;
mod m20240101_000003_create_reservation_table;
mod m20240101_000004_create_access_token_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240101_000001_create_user_table::Migration),
            Box::new(m20240101_000002_create_space_table::Migration),
            Box::new(m20240101_000003_create_reservation_table::Migration),
            Box::new(m20240101_000004_create_access_token_table::Migration),
        ]
    }
}
