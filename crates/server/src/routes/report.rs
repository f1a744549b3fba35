use axum::{extract::{rejection::JsonRejection, State}, Json};
use serde::{Deserialize, Serialize};
use service::report::ReportData;

use crate::errors::ApiError;
use crate::routes::ServerState;

#[derive(Serialize, Deserialize, Debug)]
pub struct ReportEnvelope {
    pub data: ReportData,
}

#[derive(Serialize, Debug)]
pub struct StatusOutput {
    pub status: String,
}

impl StatusOutput {
    fn new(status: &str) -> Json<Self> { Json(Self { status: status.to_string() }) }
}

/// GET /report
pub async fn get_report(State(state): State<ServerState>) -> Result<Json<ReportEnvelope>, ApiError> {
    let data = state.reports.get().await?;
    Ok(Json(ReportEnvelope { data }))
}

/// PUT /report
///
/// Any body rejection (bad JSON, wrong content type, missing or non-object
/// `data`) is a 422 and never reaches storage.
pub async fn replace_report(
    State(state): State<ServerState>,
    payload: Result<Json<ReportEnvelope>, JsonRejection>,
) -> Result<Json<StatusOutput>, ApiError> {
    let Json(body) = payload.map_err(|e| ApiError::Unprocessable(e.body_text()))?;
    state.reports.replace(&body.data).await?;
    Ok(StatusOutput::new("ok"))
}

/// DELETE /report
pub async fn delete_report(State(state): State<ServerState>) -> Result<Json<StatusOutput>, ApiError> {
    state.reports.delete().await?;
    Ok(StatusOutput::new("deleted"))
}
