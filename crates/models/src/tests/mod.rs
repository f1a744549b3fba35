
/// CRUD operations on the singleton report row
pub mod crud_tests;

use sea_orm::DatabaseConnection;

/// Fresh database file under the temp dir with the schema applied.
pub(crate) async fn temp_db() -> anyhow::Result<DatabaseConnection> {
    let path = std::env::temp_dir().join(format!("report_models_{}.db", uuid::Uuid::new_v4()));
    let db = crate::db::connect(&format!("sqlite://{}?mode=rwc", path.display())).await?;
    crate::db::init_schema(&db).await?;
    Ok(db)
}
