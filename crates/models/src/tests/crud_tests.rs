use crate::report::{self, SINGLETON_ID};
use sea_orm::EntityTrait;
use anyhow::Result;

use super::temp_db;

#[tokio::test]
async fn test_missing_row_reads_none() -> Result<()> {
    let db = temp_db().await?;
    assert_eq!(report::find_payload(&db).await?, None);
    Ok(())
}

#[tokio::test]
async fn test_upsert_inserts_then_overwrites() -> Result<()> {
    let db = temp_db().await?;

    report::upsert_payload(&db, r#"{"a":1}"#.to_string()).await?;
    assert_eq!(report::find_payload(&db).await?.as_deref(), Some(r#"{"a":1}"#));

    report::upsert_payload(&db, r#"{"b":2}"#.to_string()).await?;
    assert_eq!(report::find_payload(&db).await?.as_deref(), Some(r#"{"b":2}"#));

    let rows = report::Entity::find().all(&db).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].id, SINGLETON_ID);
    Ok(())
}

#[tokio::test]
async fn test_delete_is_idempotent() -> Result<()> {
    let db = temp_db().await?;
    assert!(!report::delete(&db).await?);

    report::upsert_payload(&db, "{}".to_string()).await?;
    assert!(report::delete(&db).await?);
    assert!(!report::delete(&db).await?);
    assert_eq!(report::find_payload(&db).await?, None);
    Ok(())
}
