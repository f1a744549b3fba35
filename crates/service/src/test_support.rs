#![cfg(test)]
use sea_orm::DatabaseConnection;

/// A fresh, migrated database file per call so tests never share state.
pub async fn get_db() -> Result<DatabaseConnection, anyhow::Error> {
    let path = std::env::temp_dir().join(format!("report_service_{}.db", uuid::Uuid::new_v4()));
    let db = models::db::connect(&format!("sqlite://{}?mode=rwc", path.display())).await?;
    models::db::init_schema(&db).await?;
    Ok(db)
}
