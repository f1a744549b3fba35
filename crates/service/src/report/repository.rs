use async_trait::async_trait;
use sea_orm::DatabaseConnection;

use crate::errors::ServiceError;

/// Storage access for the singleton report row.
///
/// Implementations deal in raw payload text; parsing belongs to `ReportService`.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    async fn get(&self) -> Result<Option<String>, ServiceError>;
    async fn put(&self, payload: String) -> Result<(), ServiceError>;
    async fn delete(&self) -> Result<(), ServiceError>;
}

/// SeaORM-backed repository implementation.
pub struct SeaOrmReportRepository {
    pub db: DatabaseConnection,
}

impl SeaOrmReportRepository {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl ReportRepository for SeaOrmReportRepository {
    async fn get(&self) -> Result<Option<String>, ServiceError> {
        Ok(models::report::find_payload(&self.db).await?)
    }

    async fn put(&self, payload: String) -> Result<(), ServiceError> {
        Ok(models::report::upsert_payload(&self.db, payload).await?)
    }

    async fn delete(&self) -> Result<(), ServiceError> {
        models::report::delete(&self.db).await?;
        Ok(())
    }
}
