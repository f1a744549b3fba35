use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("database error: {0}")]
    Db(String),
    #[error("serialization error: {0}")]
    Serialize(String),
    #[error(transparent)]
    Model(#[from] models::errors::ModelError),
}
