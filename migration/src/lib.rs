pub use sea_orm_migration::prelude::*;

mod m20240901_000001_create_games_table;
mod m20240901_000002_add_remote_id_column;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20240901_000001_create_games_table::Migration),
            Box::new(m20240901_000002_add_remote_id_column::Migration),
        ]
    }
}
