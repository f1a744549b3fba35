use std::sync::Arc;
use tracing::{debug, instrument, warn};

use crate::errors::ServiceError;
use crate::report::{repository::ReportRepository, ReportData};

/// Application service for the report document.
/// Parses on the way out, serializes on the way in; every call is one
/// repository round trip.
#[derive(Clone)]
pub struct ReportService {
    repo: Arc<dyn ReportRepository>,
}

impl ReportService {
    pub fn new(repo: Arc<dyn ReportRepository>) -> Self { Self { repo } }

    /// Current report, or an empty object when none is stored.
    ///
    /// A stored payload that is not a JSON object reads as empty.
    #[instrument(skip(self))]
    pub async fn get(&self) -> Result<ReportData, ServiceError> {
        let Some(text) = self.repo.get().await? else {
            return Ok(ReportData::new());
        };
        match serde_json::from_str::<ReportData>(&text) {
            Ok(data) => Ok(data),
            Err(e) => {
                warn!(error = %e, bytes = text.len(), "stored report payload unreadable; serving empty report");
                Ok(ReportData::new())
            }
        }
    }

    /// Overwrite the stored report with `data`.
    #[instrument(skip(self, data), fields(keys = data.len()))]
    pub async fn replace(&self, data: &ReportData) -> Result<(), ServiceError> {
        let payload = serde_json::to_string(data).map_err(|e| ServiceError::Serialize(e.to_string()))?;
        self.repo.put(payload).await?;
        debug!("report replaced");
        Ok(())
    }

    /// Remove the stored report. Succeeds when nothing is stored.
    #[instrument(skip(self))]
    pub async fn delete(&self) -> Result<(), ServiceError> {
        self.repo.delete().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::SeaOrmReportRepository;
    use crate::test_support::get_db;
    use serde_json::json;

    async fn service() -> Result<(ReportService, sea_orm::DatabaseConnection), anyhow::Error> {
        let db = get_db().await?;
        let svc = ReportService::new(Arc::new(SeaOrmReportRepository::new(db.clone())));
        Ok((svc, db))
    }

    fn object(v: serde_json::Value) -> ReportData {
        match v {
            serde_json::Value::Object(m) => m,
            _ => panic!("not an object"),
        }
    }

    #[tokio::test]
    async fn empty_store_reads_empty_object() -> Result<(), anyhow::Error> {
        let (svc, _) = service().await?;
        assert!(svc.get().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn round_trip_preserves_nesting_and_key_order() -> Result<(), anyhow::Error> {
        let (svc, _) = service().await?;
        let data = object(json!({
            "zeta": 1,
            "alpha": {"nested": [1, 2, {"deep": null}], "flag": true},
            "名称": "资产",
            "mid": 2.5
        }));
        svc.replace(&data).await?;

        let got = svc.get().await?;
        assert_eq!(got, data);
        let keys: Vec<_> = got.keys().cloned().collect();
        assert_eq!(keys, vec!["zeta", "alpha", "名称", "mid"]);
        Ok(())
    }

    #[tokio::test]
    async fn replace_overwrites_without_merge() -> Result<(), anyhow::Error> {
        let (svc, _) = service().await?;
        svc.replace(&object(json!({"a": 1, "b": 2}))).await?;
        svc.replace(&object(json!({"c": 3}))).await?;
        assert_eq!(svc.get().await?, object(json!({"c": 3})));
        Ok(())
    }

    #[tokio::test]
    async fn delete_twice_succeeds() -> Result<(), anyhow::Error> {
        let (svc, _) = service().await?;
        svc.delete().await?;
        svc.delete().await?;
        svc.replace(&object(json!({"balance": 100}))).await?;
        svc.delete().await?;
        assert!(svc.get().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn corrupt_payload_reads_empty() -> Result<(), anyhow::Error> {
        let (svc, db) = service().await?;
        models::report::upsert_payload(&db, "{not json".to_string()).await?;
        assert!(svc.get().await?.is_empty());

        // valid JSON but not an object
        models::report::upsert_payload(&db, "[1,2,3]".to_string()).await?;
        assert!(svc.get().await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn non_ascii_is_stored_verbatim() -> Result<(), anyhow::Error> {
        let (svc, db) = service().await?;
        svc.replace(&object(json!({"备注": "家庭"}))).await?;
        let raw = models::report::find_payload(&db).await?.unwrap_or_default();
        assert_eq!(raw, r#"{"备注":"家庭"}"#);
        Ok(())
    }

    #[tokio::test]
    async fn numbers_beyond_64_bits_round_trip_exactly() -> Result<(), anyhow::Error> {
        let (svc, db) = service().await?;
        let text = r#"{"big":18446744073709551616,"neg":-9223372036854775809,"huge":1e400,"pi":3.141592653589793238462643383279}"#;
        let data: ReportData = serde_json::from_str(text)?;
        svc.replace(&data).await?;

        assert_eq!(svc.get().await?, data);
        let raw = models::report::find_payload(&db).await?.unwrap_or_default();
        assert_eq!(raw, text);
        Ok(())
    }
}
