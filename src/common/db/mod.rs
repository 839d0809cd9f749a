use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectionTrait, Database, DbBackend, DbConn, DbErr};

use crate::settings::types::Settings;

pub async fn init_db(settings: &Settings) -> Result<DbConn, DbErr> {
    let db = Database::connect(&settings.database.url).await?;
    let db_conn = match db.get_database_backend() {
        DbBackend::MySql => Database::connect(&settings.database.url).await?,
        DbBackend::Postgres => Database::connect(&settings.database.url).await?,
        DbBackend::Sqlite => db,
    };
    Migrator::up(&db_conn, None).await?;
    Ok(db_conn)
}
