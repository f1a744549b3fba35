use sea_orm::{entity::prelude::*, sea_query::OnConflict, DatabaseConnection, Set};
use serde::{Deserialize, Serialize};

use crate::errors::ModelError;

/// Primary key of the one and only report row.
///
/// The migration's CHECK constraint pins the same value.
pub const SINGLETON_ID: i32 = 1;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "report_store")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(column_type = "Text")]
    pub payload: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Raw payload text of the singleton row, if it exists.
pub async fn find_payload(db: &DatabaseConnection) -> Result<Option<String>, ModelError> {
    let row = Entity::find_by_id(SINGLETON_ID).one(db).await?;
    Ok(row.map(|m| m.payload))
}

/// Insert the singleton row or overwrite its payload in one statement.
pub async fn upsert_payload(db: &DatabaseConnection, payload: String) -> Result<(), ModelError> {
    let am = ActiveModel {
        id: Set(SINGLETON_ID),
        payload: Set(payload),
    };
    Entity::insert(am)
        .on_conflict(
            OnConflict::column(Column::Id)
                .update_column(Column::Payload)
                .to_owned(),
        )
        .exec_without_returning(db)
        .await?;
    Ok(())
}

/// Remove the singleton row; returns whether a row existed.
pub async fn delete(db: &DatabaseConnection) -> Result<bool, ModelError> {
    let res = Entity::delete_by_id(SINGLETON_ID).exec(db).await?;
    Ok(res.rows_affected > 0)
}
