pub use sea_orm_migration::prelude::*;

mod m20241020_000001_create_goals_table;
mod m20241020_000002_add_created_at_index_to_goals_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20241020_000001_create_goals_table::Migration),
            Box::new(m20241020_000002_add_created_at_index_to_goals_table::Migration),
        ]
    }
}
