//! The report document: one JSON object persisted under a fixed key.

pub mod repository;
pub mod service;

pub use repository::{ReportRepository, SeaOrmReportRepository};
pub use service::ReportService;

/// Top-level shape of a report: string keys to arbitrary JSON values.
pub type ReportData = serde_json::Map<String, serde_json::Value>;
