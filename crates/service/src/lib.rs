//! Service layer for the singleton report document.
//! - Separates JSON handling from data access.
//! - Storage is reached only through the `ReportRepository` trait so the
//!   HTTP layer can be handed any backend at startup.

pub mod errors;
#[cfg(test)]
pub mod test_support;
pub mod report;
